//! Explicit argument values as source literals.

use boot_ir::{well_known, ArgumentValue, PrimitiveKind, TypeDescriptor};

use crate::java::literal::{char_literal, string_literal};
use crate::java::CodeBlock;
use crate::type_encoder::class_literal;

const NUMBER: &str = "java.lang.Number";
const CHAR_SEQUENCE: &str = "java.lang.CharSequence";

/// Write a recorded argument value for a parameter of type `parameter`.
///
/// Returns a description of the value when it has no literal form or does
/// not fit the parameter.
pub(crate) fn write_literal(
    value: &ArgumentValue,
    parameter: &TypeDescriptor,
) -> Result<CodeBlock, String> {
    if !accepts(parameter, value) {
        return Err(format!(
            "{} value for a parameter of type {}",
            value_kind(value),
            type_label(parameter)
        ));
    }
    let text = match value {
        ArgumentValue::Char(c) => char_literal(*c).ok_or_else(|| unencodable_char(*c))?,
        ArgumentValue::Boolean(b) => b.to_string(),
        ArgumentValue::Byte(n) => format!("(byte) {n}"),
        ArgumentValue::Short(n) => format!("(short) {n}"),
        ArgumentValue::Int(n) => n.to_string(),
        ArgumentValue::Long(n) => format!("{n}L"),
        ArgumentValue::Float(n) => float_literal(*n),
        ArgumentValue::Double(n) => double_literal(*n),
        ArgumentValue::String(s) => string_literal(s),
        ArgumentValue::CharArray(chars) => {
            let elements = chars
                .iter()
                .map(|c| char_literal(*c).ok_or_else(|| unencodable_char(*c)))
                .collect::<Result<Vec<String>, String>>()?;
            format!("new char[] {}", array_initializer(&elements))
        }
        ArgumentValue::StringArray(strings) => {
            let elements: Vec<String> = strings.iter().map(|s| string_literal(s)).collect();
            return Ok(CodeBlock::of("new ")
                .with_type(&well_known::type_name(well_known::STRING))
                .with("[] ")
                .with(&array_initializer(&elements)));
        }
        ArgumentValue::Reference(name) => {
            return Ok(CodeBlock::of("context.getBean(")
                .with(&string_literal(name))
                .with(", ")
                .with_block(&class_literal(parameter))
                .with(")"));
        }
        ArgumentValue::Array(elements) => {
            return Err(format!("array of {} non-scalar element(s)", elements.len()));
        }
        ArgumentValue::Opaque(description) => return Err(description.clone()),
    };
    Ok(CodeBlock::of(text))
}

fn unencodable_char(c: char) -> String {
    format!("char U+{:X} outside the basic multilingual plane", u32::from(c))
}

/// Whether a parameter declared as `parameter` takes `value` as is.
///
/// Scalars match their primitive or its wrapper. References, and values
/// that have no literal form anyway, are not checked.
fn accepts(parameter: &TypeDescriptor, value: &ArgumentValue) -> bool {
    if *parameter == TypeDescriptor::Wildcard || is_class(parameter, &[well_known::OBJECT]) {
        return true;
    }
    match value {
        ArgumentValue::Reference(_) | ArgumentValue::Array(_) | ArgumentValue::Opaque(_) => true,
        ArgumentValue::String(_) => is_class(parameter, &[well_known::STRING, CHAR_SEQUENCE]),
        ArgumentValue::CharArray(_) => {
            *parameter == TypeDescriptor::array(TypeDescriptor::Primitive(PrimitiveKind::Char))
        }
        ArgumentValue::StringArray(_) => matches!(
            parameter,
            TypeDescriptor::Array(component)
                if is_class(component, &[well_known::STRING, CHAR_SEQUENCE, well_known::OBJECT])
        ),
        ArgumentValue::Char(_) => accepts_scalar(parameter, PrimitiveKind::Char),
        ArgumentValue::Boolean(_) => accepts_scalar(parameter, PrimitiveKind::Boolean),
        ArgumentValue::Byte(_) => accepts_scalar(parameter, PrimitiveKind::Byte),
        ArgumentValue::Short(_) => accepts_scalar(parameter, PrimitiveKind::Short),
        ArgumentValue::Int(_) => accepts_scalar(parameter, PrimitiveKind::Int),
        ArgumentValue::Long(_) => accepts_scalar(parameter, PrimitiveKind::Long),
        ArgumentValue::Float(_) => accepts_scalar(parameter, PrimitiveKind::Float),
        ArgumentValue::Double(_) => accepts_scalar(parameter, PrimitiveKind::Double),
    }
}

fn accepts_scalar(parameter: &TypeDescriptor, kind: PrimitiveKind) -> bool {
    match parameter {
        TypeDescriptor::Primitive(declared) => *declared == kind,
        TypeDescriptor::Class { name, .. } => {
            let binary = name.binary_name();
            binary == kind.boxed().binary_name() || (is_numeric(kind) && binary == NUMBER)
        }
        TypeDescriptor::Array(_) | TypeDescriptor::Wildcard => false,
    }
}

fn is_numeric(kind: PrimitiveKind) -> bool {
    !matches!(
        kind,
        PrimitiveKind::Boolean | PrimitiveKind::Char | PrimitiveKind::Void
    )
}

fn is_class(ty: &TypeDescriptor, binary_names: &[&str]) -> bool {
    ty.class_name()
        .is_some_and(|name| binary_names.contains(&name.binary_name().as_str()))
}

fn value_kind(value: &ArgumentValue) -> &'static str {
    match value {
        ArgumentValue::Char(_) => "char",
        ArgumentValue::Boolean(_) => "boolean",
        ArgumentValue::Byte(_) => "byte",
        ArgumentValue::Short(_) => "short",
        ArgumentValue::Int(_) => "int",
        ArgumentValue::Long(_) => "long",
        ArgumentValue::Float(_) => "float",
        ArgumentValue::Double(_) => "double",
        ArgumentValue::String(_) => "String",
        ArgumentValue::CharArray(_) => "char[]",
        ArgumentValue::StringArray(_) => "String[]",
        ArgumentValue::Reference(_) => "reference",
        ArgumentValue::Array(_) => "array",
        ArgumentValue::Opaque(_) => "opaque",
    }
}

fn type_label(ty: &TypeDescriptor) -> String {
    match ty {
        TypeDescriptor::Primitive(kind) => kind.keyword().to_owned(),
        TypeDescriptor::Class { name, .. } => name.canonical_name(),
        TypeDescriptor::Array(component) => format!("{}[]", type_label(component)),
        TypeDescriptor::Wildcard => "?".to_owned(),
    }
}

/// `{ a, b }`, or `{}` when empty.
fn array_initializer(elements: &[String]) -> String {
    if elements.is_empty() {
        "{}".to_owned()
    } else {
        format!("{{ {} }}", elements.join(", "))
    }
}

fn float_literal(value: f32) -> String {
    if value.is_nan() {
        "Float.NaN".to_owned()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Float.POSITIVE_INFINITY".to_owned()
        } else {
            "Float.NEGATIVE_INFINITY".to_owned()
        }
    } else {
        format!("{value:?}F")
    }
}

fn double_literal(value: f64) -> String {
    if value.is_nan() {
        "Double.NaN".to_owned()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Double.POSITIVE_INFINITY".to_owned()
        } else {
            "Double.NEGATIVE_INFINITY".to_owned()
        }
    } else {
        format!("{value:?}")
    }
}
