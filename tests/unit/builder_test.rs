//! Unit tests for job document assembly

use fasta2af3::af3::build_documents;

use crate::helpers::parse_fixture;

#[test]
fn simple_fixture_builds_the_expected_document() {
    let records = parse_fixture("simple.fasta");
    let documents = build_documents(&records, None).unwrap();
    assert_eq!(documents.len(), 1);

    let document = &documents[0];
    assert_eq!(document.name, "job1");
    assert_eq!(document.model_seeds, vec![1]);
    assert_eq!(document.dialect, "alphafold3");
    assert_eq!(document.version, 2);

    assert_eq!(document.sequences.len(), 3);
    assert_eq!(document.sequences[0].kind_label(), "protein");
    assert_eq!(document.sequences[0].ids(), ["A"]);
    assert_eq!(document.sequences[1].kind_label(), "dna");
    assert_eq!(document.sequences[1].ids(), ["B"]);
    assert_eq!(document.sequences[2].kind_label(), "ligand (smiles)");
    assert_eq!(document.sequences[2].ids(), ["C", "D"]);
    assert_eq!(document.sequences[2].content(), "CCO");
}

#[test]
fn multi_fixture_builds_one_document_per_record() {
    let records = parse_fixture("multi.fasta");
    let documents = build_documents(&records, None).unwrap();
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].name, "alpha");
    assert_eq!(documents[1].name, "beta");
}

#[test]
fn multi_fixture_restarts_chain_ids_per_document() {
    let records = parse_fixture("multi.fasta");
    let documents = build_documents(&records, None).unwrap();

    assert_eq!(documents[0].sequences[0].kind_label(), "protein");
    assert_eq!(documents[0].sequences[0].content(), "MKTAYIAKQRLVNMM");
    assert_eq!(documents[0].sequences[1].kind_label(), "rna");
    assert_eq!(documents[0].sequences[1].ids(), ["B"]);

    assert_eq!(documents[1].sequences[0].ids(), ["A", "B"]);
    assert_eq!(documents[1].sequences[1].ids(), ["C"]);
    assert_eq!(documents[1].sequences[1].kind_label(), "ligand (ccd)");
}

#[test]
fn unusual_fixture_keeps_the_raw_name_in_the_document() {
    let records = parse_fixture("unusual.fasta");
    let documents = build_documents(&records, None).unwrap();
    assert_eq!(documents[0].name, "messy name!");
    assert_eq!(documents[0].sequences[1].content(), "xyz|keeps|pipes");
}

#[test]
fn name_override_is_ignored_for_multi_record_fixtures() {
    let records = parse_fixture("multi.fasta");
    let documents = build_documents(&records, Some("forced")).unwrap();
    assert_eq!(documents[0].name, "alpha");
    assert_eq!(documents[1].name, "beta");
}

#[test]
fn name_override_applies_to_single_record_fixtures() {
    let records = parse_fixture("simple.fasta");
    let documents = build_documents(&records, Some("forced")).unwrap();
    assert_eq!(documents[0].name, "forced");
}
