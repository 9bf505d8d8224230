use super::*;

#[test]
fn string_emitter_collects_fragments() {
    let mut emitter = StringEmitter::new();
    assert!(emitter.is_empty());

    emitter.emit("List");
    emitter.emit("<");
    emitter.emit("T");
    emitter.emit(">");
    emitter.emit(" ");
    emitter.emit("items");

    assert_eq!(emitter.as_str(), "List<T> items");
    assert_eq!(emitter.len(), 13);
    assert_eq!(emitter.output(), "List<T> items");
}

#[test]
fn with_capacity_starts_empty() {
    let emitter = StringEmitter::with_capacity(64);
    assert!(emitter.is_empty());
    assert_eq!(emitter.output(), "");
}

#[test]
fn plain_string_appends() {
    let mut buffer = String::from("// A.java\n");
    buffer.emit("Map<K, V>");
    buffer.emit(" m;");
    assert_eq!(buffer, "// A.java\nMap<K, V> m;");
}
