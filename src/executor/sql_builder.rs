/// Wraps an identifier in double quotes, doubling any embedded quote.
pub fn quote_identifier(ident: &str) -> String {
    let mut quoted = String::with_capacity(ident.len() + 2);
    quoted.push('"');
    for c in ident.chars() {
        if c == '"' {
            quoted.push_str("\"\"");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('"');
    quoted
}

// Stored values are compared with surrounding double quotes stripped.
pub fn build_search_sql<S: AsRef<str>>(table: &str, fields: &[S]) -> String {
    let predicates: Vec<String> = fields
        .iter()
        .map(|field| format!("TRIM({}, '\"') = ?", quote_identifier(field.as_ref())))
        .collect();

    format!(
        "SELECT * FROM {table} WHERE {predicates};",
        table = quote_identifier(table),
        predicates = predicates.join(" AND "),
    )
}
