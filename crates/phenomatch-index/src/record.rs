use phenomatch_core::MatchError;

/// Literal marker that delimits records in an ontology source.
const TERM_MARKER: &str = "[Term]";

/// One raw ontology record, extracted from the first two lines of a `[Term]`
/// block: line 1 carries `<label> <namespace>:<id>`, line 2 carries
/// `<label> <free text name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub namespace: String,
    pub id: String,
    pub name: String,
}

/// Parse every `[Term]` block in a source. Text before the first marker is
/// preamble and skipped. A block missing its id or name line fails the whole
/// parse; no partial record list is returned.
pub fn parse_records(source: &str) -> Result<Vec<Record>, MatchError> {
    source
        .split(TERM_MARKER)
        .skip(1)
        .map(|block| parse_block(block.trim()))
        .collect()
}

fn parse_block(block: &str) -> Result<Record, MatchError> {
    let mut lines = block.lines();
    let id_line = lines
        .next()
        .ok_or_else(|| MatchError::Parse("record missing id line".to_string()))?;
    let name_line = lines.next().ok_or_else(|| {
        MatchError::Parse(format!("record {id_line:?} missing name line"))
    })?;

    let (namespace, id) = parse_id(id_line.trim())?;
    let name = parse_name(name_line.trim())?;
    Ok(Record {
        namespace,
        id,
        name,
    })
}

/// `id: HP:0000001` -> `("HP", "0000001")`.
fn parse_id(line: &str) -> Result<(String, String), MatchError> {
    let rest = line
        .split_once(' ')
        .map(|(_, rest)| rest)
        .ok_or_else(|| MatchError::Parse(format!("malformed id line {line:?}")))?;
    let mut fields = rest.split(':');
    match (fields.next(), fields.next()) {
        (Some(namespace), Some(id)) => Ok((namespace.to_string(), id.to_string())),
        _ => Err(MatchError::Parse(format!("malformed id line {line:?}"))),
    }
}

/// `name: Nose anomaly` -> `Nose anomaly`.
fn parse_name(line: &str) -> Result<String, MatchError> {
    line.split_once(' ')
        .map(|(_, name)| name.to_string())
        .ok_or_else(|| MatchError::Parse(format!("malformed name line {line:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "\
format-version: 1.2
ontology: hp

[Term]
id: HP:0000001
name: All
def: \"Root of all terms.\"

[Term]
id: HP:0000271
name: Abnormality of the face
synonym: \"Facial abnormality\"
";

    #[test]
    fn parses_all_term_blocks() {
        let records = parse_records(SOURCE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].namespace, "HP");
        assert_eq!(records[0].id, "0000001");
        assert_eq!(records[0].name, "All");
        assert_eq!(records[1].id, "0000271");
        assert_eq!(records[1].name, "Abnormality of the face");
    }

    #[test]
    fn preamble_is_skipped() {
        let records = parse_records("junk before\n\n[Term]\nid: HP:0000001\nname: All\n").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn no_markers_means_no_records() {
        assert!(parse_records("format-version: 1.2\n").unwrap().is_empty());
    }

    #[test]
    fn multi_word_names_are_kept_whole() {
        let records =
            parse_records("[Term]\nid: HP:0000365\nname: Hearing impairment, mild\n").unwrap();
        assert_eq!(records[0].name, "Hearing impairment, mild");
    }

    #[test]
    fn extended_ids_keep_their_suffix() {
        let records = parse_records("[Term]\nid: HP:0000001b2\nname: All (alias)\n").unwrap();
        assert_eq!(records[0].id, "0000001b2");
    }

    #[test]
    fn missing_name_line_fails_the_parse() {
        let err = parse_records("[Term]\nid: HP:0000001\n").unwrap_err();
        assert!(matches!(err, MatchError::Parse(_)));
        assert!(err.to_string().contains("missing name line"));
    }

    #[test]
    fn empty_block_fails_the_parse() {
        let err = parse_records("[Term]\n\n").unwrap_err();
        assert!(matches!(err, MatchError::Parse(_)));
    }

    #[test]
    fn id_line_without_colon_fails_the_parse() {
        let err = parse_records("[Term]\nid: 0000001\nname: All\n").unwrap_err();
        assert!(matches!(err, MatchError::Parse(_)));
    }

    #[test]
    fn one_bad_record_fails_everything() {
        let source = "[Term]\nid: HP:0000001\nname: All\n\n[Term]\nid: HP:0000002\n";
        assert!(parse_records(source).is_err());
    }
}
