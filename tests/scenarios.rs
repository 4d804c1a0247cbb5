//! End-to-end lookups over real JavaScript and TypeScript sources.

use callsite_locator::{
    analyze_source, find_invocations, find_module_bindings, locate, require_expression,
    ScriptParser, SourceLanguage,
};

fn lines(report: &callsite_locator::Report) -> Vec<usize> {
    report.invocations.iter().map(|i| i.line).collect()
}

#[test]
fn scenario_a_binding_and_two_calls() {
    let source = r#"const fsp = require("fs/promises");
fsp.readFile(a);
obj.readFile(b);
fsp.readFile(c).then(d);
"#;
    let report =
        analyze_source(source, SourceLanguage::JavaScript, "fs/promises", "readFile").unwrap();

    assert_eq!(report.variable(), Some("fsp"));
    assert_eq!(report.binding.as_ref().unwrap().line, 1);
    assert_eq!(lines(&report), vec![2, 4]);
    assert!(report.invocations.iter().all(|i| i.text == "readFile"));
    assert_eq!(report.invocations[1].line_text, "fsp.readFile(c).then(d);");
}

#[test]
fn scenario_b_reference_without_call_is_excluded() {
    let source = r#"const fsp = require("fs/promises");
const f = fsp.readFile;
"#;
    let report =
        analyze_source(source, SourceLanguage::JavaScript, "fs/promises", "readFile").unwrap();

    assert_eq!(report.variable(), Some("fsp"));
    assert!(report.invocations.is_empty());
}

#[test]
fn scenario_c_no_binding_is_not_an_error() {
    let source = r#"const fs = require("fs");
fs.readFile(a);
fsp.readFile(b);
"#;
    let report =
        analyze_source(source, SourceLanguage::JavaScript, "fs/promises", "readFile").unwrap();

    assert!(report.binding.is_none());
    assert!(report.invocations.is_empty());
    assert_eq!(report.module, "fs/promises");
}

#[test]
fn calls_nested_inside_other_calls_are_found() {
    let source = r#"const fsp = require("fs/promises");
async function load() {
  return Promise.all([fsp.readFile(fsp.readFile(x)), other(fsp.readFile(y))]);
}
"#;
    let mut parser = ScriptParser::new().unwrap();
    let parsed = parser.parse_with_source(source).unwrap();
    let scanner = parsed.scanner();

    let calls = find_invocations("fsp", "readFile", &parsed.tree, &scanner);
    let columns: Vec<_> = calls.iter().map(|&n| scanner.column(n)).collect();

    assert_eq!(calls.len(), 3);
    assert_eq!(columns, vec![26, 39, 63]);
}

#[test]
fn shadowing_names_and_other_properties_are_ignored() {
    let source = r#"const fsp = require("fs/promises");
fsp.writeFile(a);
fspx.readFile(b);
fsp?.readFile(c);
this.fsp.readFile(d);
"#;
    let report =
        analyze_source(source, SourceLanguage::JavaScript, "fs/promises", "readFile").unwrap();

    assert!(report.invocations.is_empty());
}

#[test]
fn assignment_binding_is_discovered() {
    let source = r#"let fsp;
fsp = require("fs/promises");
fsp.readFile(a);
"#;
    let report =
        analyze_source(source, SourceLanguage::JavaScript, "fs/promises", "readFile").unwrap();

    assert_eq!(report.variable(), Some("fsp"));
    assert_eq!(report.binding.as_ref().unwrap().line, 2);
    assert_eq!(lines(&report), vec![3]);
}

#[test]
fn repeated_queries_are_stable() {
    let source = r#"const fsp = require("fs/promises");
fsp.readFile(a);
fsp.readFile(b);
"#;
    let mut parser = ScriptParser::new().unwrap();
    let parsed = parser.parse_with_source(source).unwrap();
    let scanner = parsed.scanner();
    let import = require_expression("fs/promises");

    assert_eq!(
        find_module_bindings(&import, &parsed.tree, &scanner),
        find_module_bindings(&import, &parsed.tree, &scanner)
    );
    assert_eq!(
        find_invocations("fsp", "readFile", &parsed.tree, &scanner),
        find_invocations("fsp", "readFile", &parsed.tree, &scanner)
    );
    assert_eq!(
        locate("fs/promises", "readFile", &parsed.tree, &scanner),
        locate("fs/promises", "readFile", &parsed.tree, &scanner)
    );
}

#[test]
fn crlf_sources_report_clean_lines() {
    let source = "const fsp = require(\"fs/promises\");\r\nfsp.readFile(a);\r\n";
    let report =
        analyze_source(source, SourceLanguage::JavaScript, "fs/promises", "readFile").unwrap();

    assert_eq!(report.invocations.len(), 1);
    assert_eq!(report.invocations[0].to_string(), "line 2: fsp.readFile(a);");
}

#[test]
fn typescript_sources_use_the_same_queries() {
    let source = r#"const fsp = require("fs/promises");
async function load(path: string): Promise<string> {
  return fsp.readFile(path, "utf8");
}
"#;
    let report =
        analyze_source(source, SourceLanguage::TypeScript, "fs/promises", "readFile").unwrap();

    assert_eq!(report.variable(), Some("fsp"));
    assert_eq!(lines(&report), vec![3]);
}
