/// Build a [`Compound`][`crate::Compound`] from `name => value` pairs. Each
/// value goes through `Into<Value>`, so the Rust type picks the tag type.
///
/// ```rust
/// use blocknbt::{compound, ByteArray, Value};
///
/// let c = compound! {
///     "byte" => 1i8,
///     "int" => 42,
///     "long" => 7i64,
///     "name" => "Steve",
///     "bytes" => ByteArray::new(vec![1, 2, 3]),
///     "nested" => compound! { "x" => 0.5f32 },
/// };
///
/// assert_eq!(c.get("int"), Some(&Value::Int(42)));
/// assert_eq!(c.keys().collect::<Vec<_>>(), ["byte", "int", "long", "name", "bytes", "nested"]);
/// ```
///
/// A repeated name keeps its first position but takes the last value.
#[macro_export]
macro_rules! compound {
    () => {
        $crate::Compound::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut compound = $crate::Compound::new();
        $(
            compound.insert($name, $value);
        )+
        compound
    }};
}
