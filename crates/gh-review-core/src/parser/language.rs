/// Map a file name to a language identifier for syntax highlighting.
///
/// Only the extension (text after the last `.`) is considered, compared
/// case-insensitively. Unknown extensions map to `"plaintext"`.
pub fn detect_language(filename: &str) -> &'static str {
    let ext = filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    match ext.as_str() {
        // JavaScript/TypeScript
        "ts" | "tsx" => "typescript",
        "js" | "jsx" | "mjs" | "cjs" => "javascript",

        "py" | "pyw" => "python",

        // Web
        "html" | "htm" => "html",
        "css" | "scss" | "less" => "css",
        "json" => "json",
        "xml" => "xml",
        "yaml" | "yml" => "yaml",

        "java" => "java",
        "kt" => "kotlin",
        "cs" => "csharp",
        "go" => "go",
        "rs" => "rust",
        "rb" => "ruby",
        "php" => "php",
        "swift" => "swift",
        "c" | "h" => "c",
        "cpp" | "hpp" => "cpp",
        "sh" | "bash" | "zsh" => "bash",
        "sql" => "sql",
        "md" | "markdown" => "markdown",

        _ => "plaintext",
    }
}
