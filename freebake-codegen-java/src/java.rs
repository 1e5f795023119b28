//! Well-known JDK types referenced by generated builders.

use freebake_core::QualifiedName;

fn lang(simple: &str) -> QualifiedName {
    QualifiedName::of("java.lang", simple)
}

fn util(simple: &str) -> QualifiedName {
    QualifiedName::of("java.util", simple)
}

fn function(simple: &str) -> QualifiedName {
    QualifiedName::of("java.util.function", simple)
}

pub fn string() -> QualifiedName {
    lang("String")
}

pub fn object() -> QualifiedName {
    lang("Object")
}

pub fn iterable() -> QualifiedName {
    lang("Iterable")
}

pub fn string_builder() -> QualifiedName {
    lang("StringBuilder")
}

pub fn illegal_state_exception() -> QualifiedName {
    lang("IllegalStateException")
}

pub fn unsupported_operation_exception() -> QualifiedName {
    lang("UnsupportedOperationException")
}

pub fn double() -> QualifiedName {
    lang("Double")
}

pub fn float() -> QualifiedName {
    lang("Float")
}

pub fn objects() -> QualifiedName {
    util("Objects")
}

pub fn collections() -> QualifiedName {
    util("Collections")
}

pub fn enum_set() -> QualifiedName {
    util("EnumSet")
}

pub fn optional() -> QualifiedName {
    util("Optional")
}

pub fn list() -> QualifiedName {
    util("List")
}

pub fn array_list() -> QualifiedName {
    util("ArrayList")
}

pub fn set() -> QualifiedName {
    util("Set")
}

pub fn linked_hash_set() -> QualifiedName {
    util("LinkedHashSet")
}

pub fn map() -> QualifiedName {
    util("Map")
}

pub fn map_entry() -> QualifiedName {
    map().nested("Entry")
}

pub fn linked_hash_map() -> QualifiedName {
    util("LinkedHashMap")
}

pub fn spliterator() -> QualifiedName {
    util("Spliterator")
}

pub fn base_stream() -> QualifiedName {
    QualifiedName::of("java.util.stream", "BaseStream")
}

pub fn consumer() -> QualifiedName {
    function("Consumer")
}

pub fn unary_operator() -> QualifiedName {
    function("UnaryOperator")
}

/// The functional interface used by `mapX` for a primitive-typed value, with
/// its apply method.
pub fn primitive_unary_operator(keyword: &str) -> Option<(QualifiedName, &'static str)> {
    match keyword {
        "int" => Some((function("IntUnaryOperator"), "applyAsInt")),
        "long" => Some((function("LongUnaryOperator"), "applyAsLong")),
        "double" => Some((function("DoubleUnaryOperator"), "applyAsDouble")),
        _ => None,
    }
}
