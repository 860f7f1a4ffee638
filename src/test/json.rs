use serde_json::json;

use crate::error::ErrorKind;
use crate::json::{from_json, from_json_str, to_json, to_json_string};
use crate::{
    compound, ByteArray, Compound, CustomValue, IntArray, List, LongArray, Tag, TypeRegistry,
    Value, MAX_DEPTH,
};

use super::{on_small_stack, registry_with_block_pos, BlockPos, BLOCK_POS_ID};

fn round_trip(tag: &Tag) -> Tag {
    let registry = TypeRegistry::new();
    let doc = to_json(tag, &registry).unwrap();
    from_json(&doc, &registry).unwrap()
}

#[test]
fn document_shape() {
    let root = Tag::new(
        "root",
        compound! {
            "int" => -981735,
            "list" => List::try_from(vec![Value::from(1i8), Value::from(2i8)]).unwrap(),
            "bytes" => ByteArray::new(vec![1, -1]),
        },
    );

    let doc = to_json(&root, &TypeRegistry::new()).unwrap();
    let expected = json!({
        "type": 10,
        "name": "root",
        "value": {
            "int": { "type": 3, "name": "int", "value": -981735 },
            "list": {
                "type": 9,
                "name": "list",
                "value": [
                    { "type": 1, "value": 1 },
                    { "type": 1, "value": 2 },
                ],
            },
            "bytes": { "type": 7, "name": "bytes", "value": [1, -1] },
        },
    });
    assert_eq!(doc, expected);
}

#[test]
fn unnamed_root_has_no_name_field() {
    let doc = to_json(&Tag::unnamed(Compound::new()), &TypeRegistry::new()).unwrap();
    assert_eq!(doc, json!({ "type": 10, "value": {} }));

    let back = from_json(&doc, &TypeRegistry::new()).unwrap();
    assert_eq!(back.name(), None);
}

#[test]
fn every_type_round_trips() {
    let root = Tag::new(
        "everything",
        compound! {
            "byte" => i8::MIN,
            "short" => i16::MIN,
            "int" => i32::MAX,
            "long" => i64::MIN,
            "float" => 0.1f32,
            "tiny" => f32::MIN_POSITIVE,
            "double" => std::f64::consts::E,
            "bytes" => ByteArray::new(vec![-128, 0, 127]),
            "string" => "\u{1F600} \"quoted\"",
            "list" => List::try_from(vec![Value::from("a"), Value::from("b")]).unwrap(),
            "empty" => List::new(),
            "nested" => compound! { "inner" => compound! { "x" => 1 } },
            "ints" => IntArray::new(vec![i32::MIN, i32::MAX]),
            "longs" => LongArray::new(vec![i64::MAX]),
        },
    );

    assert_eq!(round_trip(&root), root);
}

#[test]
fn member_order_is_kept() {
    let root = Tag::unnamed(compound! { "z" => 1, "a" => 2 });
    let back = round_trip(&root);
    assert_eq!(back.compound().unwrap().keys().collect::<Vec<_>>(), ["z", "a"]);
}

#[test]
fn object_key_names_the_member() {
    let doc = json!({
        "type": 10,
        "value": {
            "key": { "type": 8, "name": "ignored", "value": "v" },
            "nameless": { "type": 3, "value": 1 },
        },
    });

    let tag = from_json(&doc, &TypeRegistry::new()).unwrap();
    let c = tag.compound().unwrap();
    assert_eq!(c.get_string("key"), Some("v"));
    assert_eq!(c.get_int("nameless"), Some(1));
}

#[test]
fn root_must_be_compound() {
    let err = to_json(&Tag::new("x", 1), &TypeRegistry::new()).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidRoot);

    let err = from_json(&json!({ "type": 3, "value": 1 }), &TypeRegistry::new()).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidRoot);
}

#[test]
fn missing_fields_are_malformed() {
    let registry = TypeRegistry::new();
    for doc in [
        json!({ "value": {} }),
        json!({ "type": 10 }),
        json!({ "type": "10", "value": {} }),
        json!({ "type": 300, "value": {} }),
        json!({ "type": 10, "name": 5, "value": {} }),
        json!([1, 2]),
        json!({ "type": 10, "value": { "a": { "type": 3 } } }),
        json!({ "type": 10, "value": { "a": 5 } }),
    ] {
        let err = from_json(&doc, &registry).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Malformed, "{}", doc);
    }
}

#[test]
fn wrong_value_shapes_are_malformed() {
    let registry = TypeRegistry::new();
    for member in [
        json!({ "type": 3, "value": "1" }),
        json!({ "type": 3, "value": 1.5 }),
        json!({ "type": 8, "value": 1 }),
        json!({ "type": 9, "value": {} }),
        json!({ "type": 10, "value": [] }),
        json!({ "type": 7, "value": [1, "2"] }),
        json!({ "type": 5, "value": 1e300 }),
    ] {
        let doc = json!({ "type": 10, "value": { "m": member } });
        let err = from_json(&doc, &registry).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Malformed, "{}", member);
    }
}

#[test]
fn numbers_are_range_checked() {
    let registry = TypeRegistry::new();
    for member in [
        json!({ "type": 1, "value": 128 }),
        json!({ "type": 2, "value": -32769 }),
        json!({ "type": 3, "value": 2147483648u64 }),
        json!({ "type": 4, "value": u64::MAX }),
        json!({ "type": 11, "value": [0, 4294967296u64] }),
    ] {
        let doc = json!({ "type": 10, "value": { "m": member } });
        let err = from_json(&doc, &registry).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Malformed, "{}", member);
    }

    let doc = json!({ "type": 10, "value": { "m": { "type": 1, "value": -128 } } });
    let tag = from_json(&doc, &registry).unwrap();
    assert_eq!(tag.compound().unwrap().get_byte("m"), Some(-128));
}

#[test]
fn integers_are_accepted_as_floats() {
    let doc = json!({ "type": 10, "value": { "f": { "type": 5, "value": 2 } } });
    let tag = from_json(&doc, &TypeRegistry::new()).unwrap();
    assert_eq!(tag.compound().unwrap().get_float("f"), Some(2.0));
}

#[test]
fn non_finite_floats_cannot_be_converted() {
    let root = Tag::unnamed(compound! { "nan" => f64::NAN });
    let err = to_json(&root, &TypeRegistry::new()).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Malformed);

    let root = Tag::unnamed(compound! { "inf" => f32::INFINITY });
    let err = to_json(&root, &TypeRegistry::new()).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Malformed);
}

#[test]
fn unknown_type_fails() {
    let doc = json!({ "type": 10, "value": { "m": { "type": 77, "value": 1 } } });
    let err = from_json(&doc, &TypeRegistry::new()).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnknownType(77));
}

#[test]
fn mixed_list_is_rejected() {
    let doc = json!({
        "type": 10,
        "value": {
            "l": {
                "type": 9,
                "value": [
                    { "type": 3, "value": 1 },
                    { "type": 8, "value": "two" },
                ],
            },
        },
    });
    let err = from_json(&doc, &TypeRegistry::new()).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::ListTypeMismatch {
            expected: 3,
            found: 8
        }
    );
}

#[test]
fn custom_payload_round_trips() {
    let registry = registry_with_block_pos();
    let root = Tag::new(
        "",
        compound! { "pos" => CustomValue::new(BLOCK_POS_ID, BlockPos { x: 4, y: 5, z: 6 }) },
    );

    let doc = to_json(&root, &registry).unwrap();
    assert_eq!(
        doc["value"]["pos"],
        json!({ "type": BLOCK_POS_ID, "name": "pos", "value": [4, 5, 6] })
    );
    assert_eq!(from_json(&doc, &registry).unwrap(), root);

    let err = from_json(&doc, &TypeRegistry::new()).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnknownType(BLOCK_POS_ID));
}

/// `levels` compounds nested below the root, each under the name "a".
fn nested_compounds(levels: usize) -> Compound {
    let mut inner = Compound::new();
    for _ in 0..levels {
        let mut outer = Compound::new();
        outer.insert("a", inner);
        inner = outer;
    }
    inner
}

#[test]
fn depth_limit() {
    let inner = nested_compounds(MAX_DEPTH);
    let ok = Tag::unnamed(inner.clone());
    assert_eq!(round_trip(&ok), ok);

    let mut outer = Compound::new();
    outer.insert("a", inner);
    let too_deep = Tag::unnamed(outer);
    let err = to_json(&too_deep, &TypeRegistry::new()).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::StructureTooComplex);
}

#[test]
fn too_deep_document_fails_to_read() {
    let mut doc = json!({ "type": 10, "value": {} });
    for _ in 0..=MAX_DEPTH {
        doc = json!({ "type": 10, "value": { "a": doc } });
    }
    let err = from_json(&doc, &TypeRegistry::new()).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::StructureTooComplex);
}

#[test]
fn max_depth_text_on_a_small_stack() {
    on_small_stack(|| {
        let registry = TypeRegistry::new();
        let root = Tag::new("deep", nested_compounds(MAX_DEPTH));

        assert_eq!(round_trip(&root), root);
        for pretty in [false, true] {
            let text = to_json_string(&root, &registry, pretty).unwrap();
            assert_eq!(from_json_str(&text, &registry).unwrap(), root);
        }
    });
}

#[test]
fn text_nested_past_any_tree_is_refused() {
    let registry = TypeRegistry::new();
    let text = format!("{}{}", "[".repeat(5000), "]".repeat(5000));
    let err = from_json_str(&text, &registry).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::StructureTooComplex);

    // Brackets inside strings are not nesting.
    let root = Tag::new("r", compound! { "s" => "{[".repeat(3000) });
    let text = to_json_string(&root, &registry, false).unwrap();
    assert_eq!(from_json_str(&text, &registry).unwrap(), root);
}

#[test]
fn text_deeper_than_max_depth_fails() {
    let mut text = r#"{"type":10,"value":{}}"#.to_owned();
    for _ in 0..=MAX_DEPTH {
        text = format!(r#"{{"type":10,"value":{{"a":{}}}}}"#, text);
    }
    let err = from_json_str(&text, &TypeRegistry::new()).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::StructureTooComplex);
}

#[test]
fn empty_typed_list_comes_back_untyped() {
    let registry = TypeRegistry::new();
    let root = Tag::new(
        "r",
        compound! {
            "empty" => List::of(3),
            "ints" => List::try_from(vec![Value::Int(1)]).unwrap(),
        },
    );

    let back = round_trip(&root);
    assert_eq!(back, root);
    let c = back.compound().unwrap();
    assert_eq!(c.get_list("empty").unwrap().element_type(), None);
    assert_eq!(c.get_list("ints").unwrap().element_type(), Some(3));

    // Binary keeps a declared type, so this shows End was written.
    let bytes = crate::binary::to_bytes(&back, &registry).unwrap();
    let read = crate::binary::from_bytes(&bytes, &registry).unwrap();
    let c = read.compound().unwrap();
    assert_eq!(c.get_list("empty").unwrap().element_type(), None);

    let bytes = crate::binary::to_bytes(&root, &registry).unwrap();
    let read = crate::binary::from_bytes(&bytes, &registry).unwrap();
    let c = read.compound().unwrap();
    assert_eq!(c.get_list("empty").unwrap().element_type(), Some(3));
}

#[test]
fn strings() {
    let registry = TypeRegistry::new();
    let root = Tag::new("r", compound! { "a" => 1i16 });

    let compact = to_json_string(&root, &registry, false).unwrap();
    assert_eq!(
        compact,
        r#"{"type":10,"name":"r","value":{"a":{"type":2,"name":"a","value":1}}}"#
    );
    assert!(to_json_string(&root, &registry, true).unwrap().contains('\n'));

    assert_eq!(from_json_str(&compact, &registry).unwrap(), root);

    let err = from_json_str("{\"type\": 10,", &registry).unwrap_err();
    assert!(err.is_eof());
    let err = from_json_str("not json", &registry).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Malformed);
}
