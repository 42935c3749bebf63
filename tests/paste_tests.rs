use sheet_fill::fill::fill_model::FieldSpec;
use sheet_fill::paste::parser::parse_pasted;

fn pairs(text: &str) -> Vec<(String, String)> {
    parse_pasted(text)
        .into_iter()
        .map(|FieldSpec { name, value }| (name, value))
        .collect()
}

fn owned(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(n, v)| (n.to_string(), v.to_string()))
        .collect()
}

#[test]
fn one_pair_per_line() {
    assert_eq!(
        pairs("First Name,Jane\nLast Name,Doe"),
        owned(&[("First Name", "Jane"), ("Last Name", "Doe")])
    );
}

#[test]
fn names_and_values_trimmed() {
    assert_eq!(pairs("  Email ,  jane@x.org  "), owned(&[("Email", "jane@x.org")]));
}

#[test]
fn tab_separated_rows_from_spreadsheets() {
    assert_eq!(
        pairs("City\tSpringfield\nZip\t12345\n"),
        owned(&[("City", "Springfield"), ("Zip", "12345")])
    );
}

#[test]
fn later_separators_belong_to_the_value() {
    assert_eq!(
        pairs("Address,1 Main St, Apt 2\nNotes\ta\tb"),
        owned(&[("Address", "1 Main St, Apt 2"), ("Notes", "a\tb")])
    );
}

#[test]
fn quoted_separator_does_not_split() {
    assert_eq!(
        pairs(r#""Name, Full",Jane Doe"#),
        owned(&[("Name, Full", "Jane Doe")])
    );
    assert_eq!(pairs(r#"Company,"Acme, Inc.""#), owned(&[("Company", "Acme, Inc.")]));
}

#[test]
fn quotes_wrapping_whole_paste_are_removed() {
    assert_eq!(
        pairs("\"Phone,555-1234\nCity,Paris\""),
        owned(&[("Phone", "555-1234"), ("City", "Paris")])
    );
}

#[test]
fn blank_lines_and_crlf_ignored() {
    assert_eq!(
        pairs("\r\nA,1\r\n\r\n   \r\nB,2\r\n"),
        owned(&[("A", "1"), ("B", "2")])
    );
}

#[test]
fn missing_value_is_empty() {
    assert_eq!(pairs("Newsletter\nTerms,"), owned(&[("Newsletter", ""), ("Terms", "")]));
}

#[test]
fn empty_names_dropped() {
    assert_eq!(pairs(",orphan\n\"\",quoted blank\nKept,1"), owned(&[("Kept", "1")]));
}

#[test]
fn empty_or_quote_only_paste_yields_nothing() {
    assert!(parse_pasted("").is_empty());
    assert!(parse_pasted("   \n\n").is_empty());
    assert!(parse_pasted("\"").is_empty());
    assert!(parse_pasted("\"\"").is_empty());
}

#[test]
fn order_and_duplicates_preserved() {
    assert_eq!(
        pairs("Email,a@x\nEmail,b@x"),
        owned(&[("Email", "a@x"), ("Email", "b@x")])
    );
}
