//! Line-definition script (`js/index.js`): one `Line` object and one
//! accessor per registry line, in id order.

use crate::lines::{Line, LineRegistry};

use super::writer::ScriptWriter;

pub fn render_lines(registry: &LineRegistry) -> String {
    let mut w = ScriptWriter::new();
    for line in registry.lines() {
        write_line(&mut w, &line);
    }
    w.finish()
}

fn write_line(w: &mut ScriptWriter, line: &Line) {
    let Line {
        id,
        source,
        target,
        kind,
    } = line;
    w.line(format!(
        "var line{id} = new Line(\"{source}\", \"{target}\", {});",
        kind.is_corequisite()
    ));
    w.open(format!("function getLine{id}() {{"));
    w.line(format!("return line{id};"));
    w.close("}");
}
