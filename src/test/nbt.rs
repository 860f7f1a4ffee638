use std::io::Cursor;

use crate::{compound, Compression, CustomValue, List, Nbt, SnbtConfig, Tag, Value};

use super::{BlockPos, BLOCK_POS_ID};

fn sample() -> Tag {
    Tag::new(
        "level",
        compound! {
            "seed" => 1234567890123i64,
            "name" => "world",
            "spawn" => compound! { "x" => 0, "y" => 64, "z" => 0 },
            "tags" => List::try_from(vec![Value::from("a")]).unwrap(),
        },
    )
}

#[test]
fn bytes_with_every_compression() {
    let root = sample();
    for compression in [Compression::None, Compression::Gzip, Compression::Zlib] {
        let nbt = Nbt::new().with_compression(compression);
        let bytes = nbt.to_bytes(&root).unwrap();
        assert_eq!(Compression::detect(&bytes), compression);

        // Reading detects compression regardless of the configured one.
        assert_eq!(Nbt::new().from_bytes(&bytes).unwrap(), root);
    }
}

#[test]
fn writer_and_reader() {
    let root = sample();
    let nbt = Nbt::new();

    let mut out = Vec::new();
    nbt.to_writer_with(&mut out, &root, Compression::Zlib).unwrap();
    assert_eq!(Compression::detect(&out), Compression::Zlib);
    assert_eq!(nbt.from_reader(Cursor::new(&out)).unwrap(), root);

    let mut out = Vec::new();
    nbt.to_writer(&mut out, &root).unwrap();
    assert_eq!(out[0], 10);
    assert_eq!(nbt.from_reader(&out[..]).unwrap(), root);
}

#[test]
fn truncated_gzip_fails() {
    let nbt = Nbt::new().with_compression(Compression::Gzip);
    let bytes = nbt.to_bytes(&sample()).unwrap();
    assert!(nbt.from_bytes(&bytes[..bytes.len() / 2]).is_err());
    assert!(nbt.from_reader(&bytes[..bytes.len() / 2]).is_err());
}

#[test]
fn files() {
    let path = std::env::temp_dir().join(format!("blocknbt-test-{}.dat", std::process::id()));
    let nbt = Nbt::new().with_compression(Compression::Gzip);
    let root = sample();

    nbt.to_file(&path, &root).unwrap();
    let back = Nbt::new().from_file(&path);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(back.unwrap(), root);
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("blocknbt-test-does-not-exist.dat");
    let err = Nbt::new().from_file(path).unwrap_err();
    assert_eq!(err.kind(), &crate::error::ErrorKind::Io);
}

#[test]
fn snbt_uses_configured_layout() {
    let mut nbt = Nbt::new();
    let value = Value::from(compound! { "a" => 1i8 });
    assert_eq!(nbt.to_snbt(&value).unwrap(), "{a:1b}");

    nbt.set_snbt_config(SnbtConfig::pretty().with_indent(1));
    assert_eq!(nbt.to_snbt(&value).unwrap(), "{\n a: 1b\n}");
    assert!(nbt.snbt_config().pretty_print);
}

#[test]
fn json_round_trip() {
    let nbt = Nbt::new();
    let root = sample();

    let doc = nbt.to_json(&root).unwrap();
    assert_eq!(nbt.from_json(&doc).unwrap(), root);

    let text = nbt.to_json_string(&root).unwrap();
    assert!(!text.contains('\n'));
    assert_eq!(nbt.from_json_str(&text).unwrap(), root);
}

#[test]
fn custom_types_through_the_registry() {
    let mut nbt = Nbt::new();
    nbt.registry_mut()
        .register_custom::<BlockPos>(BLOCK_POS_ID, "BlockPos")
        .unwrap();

    let root = Tag::unnamed(compound! {
        "pos" => CustomValue::new(BLOCK_POS_ID, BlockPos { x: 1, y: 2, z: 3 }),
    });
    let bytes = nbt.to_bytes(&root).unwrap();
    assert_eq!(nbt.from_bytes(&bytes).unwrap().value(), root.value());

    nbt.set_registry(Default::default());
    assert!(!nbt.registry().contains(BLOCK_POS_ID));
    assert!(nbt.from_bytes(&bytes).is_err());
}
