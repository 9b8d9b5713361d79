use super::*;

const TABLE: &str = "\
Nome,Familia,Uso
Amoxicillin,Penicillins,Respiratory tract infections
Ciprofloxacin , Fluoroquinolones , Urinary tract infections
,Orphan,Row without a name
Amoxicillin,Duplicate,Ignored
";

fn catalog() -> AntibioticCatalog {
    AntibioticCatalog::from_reader(TABLE.as_bytes()).unwrap()
}

#[test]
fn test_header_and_nameless_rows_skipped() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 3);
    assert!(catalog.find("Nome").is_none());
}

#[test]
fn test_find_is_case_insensitive() {
    let catalog = catalog();
    let found = catalog.find("  amoxicillin ").unwrap();
    assert_eq!(found.family, "Penicillins");
}

#[test]
fn test_fields_are_trimmed() {
    let found = catalog().find("CIPROFLOXACIN").cloned().unwrap();
    assert_eq!(
        found,
        Antibiotic {
            name: "Ciprofloxacin".to_string(),
            family: "Fluoroquinolones".to_string(),
            usage: "Urinary tract infections".to_string(),
        }
    );
}

#[test]
fn test_first_duplicate_wins() {
    assert_eq!(catalog().find("Amoxicillin").unwrap().family, "Penicillins");
}

#[test]
fn test_find_requires_exact_name() {
    assert!(catalog().find("amoxi").is_none());
}

#[test]
fn test_short_rows_are_padded() {
    let catalog = AntibioticCatalog::from_reader("n,f,u\nVancomycin\n".as_bytes()).unwrap();
    let found = catalog.find("vancomycin").unwrap();
    assert_eq!(found.family, "");
    assert_eq!(found.usage, "");
}

#[test]
fn test_display_phrase() {
    let found = catalog().find("amoxicillin").cloned().unwrap();
    assert_eq!(
        found.to_string(),
        "O Antibiotico: Amoxicillin, Pertence a Familia dos: Penicillins, \
         E é usado para: Respiratory tract infections"
    );
}

#[test]
fn test_missing_file() {
    let result = AntibioticCatalog::from_path("/nonexistent/antibioticos.csv");
    assert!(matches!(result, Err(CatalogError::Io(_))));
}
