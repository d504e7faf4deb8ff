//! End-to-end checks of the extractor against structures defined here.

use manticore_layout::{BuildConstants, FieldOffset, LayoutExtractor, field_offset};

#[repr(C)]
#[allow(dead_code, reason = "only the layout is inspected")]
struct Words {
    a: u64,
    b: u64,
    c: u64,
}

#[repr(C)]
#[allow(dead_code, reason = "only the layout is inspected")]
struct NarrowA {
    a: u32,
    b: u64,
    c: u64,
}

fn offsets_in<T>(name: &'static str, fields: Vec<FieldOffset<T>>) -> String {
    let extractor = LayoutExtractor::new(name, BuildConstants::default(), fields);
    let text = extractor.declaration_block().to_string();
    text.lines()
        .skip_while(|l| !l.contains("(* offsets into"))
        .skip(1)
        .take_while(|l| !l.is_empty())
        .map(|l| format!("{}\n", l.trim()))
        .collect()
}

#[test]
fn word_fields() {
    let fields = vec![
        field_offset!(Words, a),
        field_offset!(Words, b),
        field_offset!(Words, c),
    ];
    assert_eq!(
        offsets_in("Words", fields),
        "val a : IntInf.int = 0\n\
         val b : IntInf.int = 8\n\
         val c : IntInf.int = 16\n"
    );
}

#[test]
fn narrow_first_field() {
    let fields = vec![
        field_offset!(NarrowA, a),
        field_offset!(NarrowA, b),
        field_offset!(NarrowA, c),
    ];
    let b = core::mem::align_of::<u64>();
    assert_eq!(
        offsets_in("NarrowA", fields),
        format!(
            "val a : IntInf.int = 0\n\
             val b : IntInf.int = {b}\n\
             val c : IntInf.int = {}\n",
            b + 8
        )
    );
}

#[test]
fn renamed_symbols() {
    let fields = vec![field_offset!(Words, c => "third")];
    assert_eq!(offsets_in("Words", fields), "val third : IntInf.int = 16\n");
}
