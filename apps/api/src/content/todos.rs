use serde_json::Value;

const TODO_MARKER: &str = "TODO:";

/// Lists every string in `value` that still starts with `TODO:`, prefixed by
/// its JSON path (`experience[0].roles[0].bullets[1]: TODO: add metric`).
pub fn extract_todos(value: &Value) -> Vec<String> {
    let mut todos = Vec::new();
    walk(value, String::new(), &mut todos);
    todos
}

fn walk(value: &Value, path: String, todos: &mut Vec<String>) {
    match value {
        Value::String(s) if s.starts_with(TODO_MARKER) => {
            todos.push(format!("{path}: {s}"));
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                walk(item, format!("{path}[{i}]"), todos);
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                walk(child, child_path, todos);
            }
        }
        _ => {}
    }
}
