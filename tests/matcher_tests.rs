use sheet_fill::label::matcher::matches;

#[test]
fn exact_after_normalization() {
    assert!(matches("First Name", "first_name"));
    assert!(matches("E-mail", "email"));
    assert!(matches("Prénom", "prenom"), "Accents are ignored");
}

#[test]
fn empty_sides_never_match() {
    assert!(!matches("", "anything"));
    assert!(!matches("anything", ""));
    assert!(!matches("--", "Name"), "Label normalizing to empty");
    assert!(!matches("", ""));
}

#[test]
fn containment_in_either_direction() {
    assert!(matches("Email address", "Email"), "Label contains field");
    assert!(matches("phone", "Home Phone Number"), "Field contains label");
}

#[test]
fn word_sets_compared_on_raw_lowercased_words() {
    // "namefirst" and "firstname" do not contain each other,
    // but every field word appears in the label
    assert!(matches("Name First", "first name"));
    assert!(matches("last name given", "Given Last"), "Label words ⊇ field words");
}

#[test]
fn word_check_keeps_punctuation_attached() {
    // "first," is not the word "first", and the normalized forms differ in order
    assert!(!matches("Name, First", "first name"));
}

#[test]
fn unrelated_labels_do_not_match() {
    assert!(!matches("Phone", "Email"));
    assert!(!matches("fname", "First Name"), "Abbreviations are not expanded");
}
