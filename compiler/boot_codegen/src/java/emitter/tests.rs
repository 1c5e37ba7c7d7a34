use super::*;

#[test]
fn string_emitter_basic() {
    let mut emitter = StringEmitter::new();
    emitter.emit("public");
    emitter.emit_space();
    emitter.emit("class");
    assert_eq!(emitter.output(), "public class");
}

#[test]
fn string_emitter_indentation() {
    let mut emitter = StringEmitter::new();
    emitter.emit("class {");
    emitter.emit_newline();
    emitter.emit_indent(1);
    emitter.emit("void m() {");
    emitter.emit_newline();
    emitter.emit_line(2, "call();");
    assert_eq!(emitter.output(), "class {\n  void m() {\n    call();\n");
}

#[test]
fn string_emitter_trailing_newline() {
    let mut emitter = StringEmitter::with_capacity(16);
    assert!(emitter.is_empty());
    emitter.emit("}");
    emitter.ensure_trailing_newline();
    emitter.ensure_trailing_newline();
    assert_eq!(emitter.as_str(), "}\n");
}
