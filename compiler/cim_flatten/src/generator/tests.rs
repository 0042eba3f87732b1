#![allow(clippy::unwrap_used)]

use cim_diagnostic::ErrorCode;
use cim_ir::{MemoryOntology, PropertyInfo};
use pretty_assertions::assert_eq;

use super::*;
use crate::sink::{RecordingSink, SchemaEvent};

const CIM: &str = "http://iec.ch/TC57/CIM#";
const PROFILE: &str = "http://example.com/profile#";

#[test]
fn phases_advance_in_order() {
    let mut phase = Phase::Scan;
    let mut seen = vec![phase];
    while let Some(next) = phase.next() {
        seen.push(next);
        phase = next;
    }
    assert_eq!(
        seen,
        vec![
            Phase::Scan,
            Phase::EmitClasses,
            Phase::EmitDatatypes,
            Phase::EmitProperties,
            Phase::EmitHierarchy,
            Phase::Done,
        ]
    );
}

#[test]
fn empty_model_emits_nothing() {
    let model = MemoryOntology::builder().build();
    let mut sink = RecordingSink::new();
    let report = SchemaGenerator::new(&model, GeneratorOptions::default())
        .run(&mut sink)
        .unwrap();

    assert!(sink.events.is_empty());
    assert_eq!(report, GenerateReport::default());
}

#[test]
fn class_facts_come_in_order() {
    let mut b = MemoryOntology::builder();
    let breaker = b.class(&format!("{CIM}Breaker"));
    b.comment(breaker, "A mechanical switching device.");
    let profile = b.profile(&format!("{PROFILE}Breaker"), Some(breaker));
    b.comment(profile, "Breakers in the network model.");
    let model = b.build();

    let mut sink = RecordingSink::new();
    let report = SchemaGenerator::new(&model, GeneratorOptions::default())
        .run(&mut sink)
        .unwrap();

    let id = format!("{CIM}Breaker");
    assert_eq!(
        sink.events,
        vec![
            SchemaEvent::Class {
                id: id.clone(),
                original: id.clone(),
            },
            SchemaEvent::Label {
                id: id.clone(),
                text: "Breaker".into(),
            },
            SchemaEvent::Comment {
                id,
                base: Some("A mechanical switching device.".into()),
                profile: Some("Breakers in the network model.".into()),
            },
        ]
    );
    assert_eq!(report.stats.profiles_scanned, 1);
    assert_eq!(report.stats.classes, 1);
}

#[test]
fn namespace_rewrites_named_profiles() {
    let mut b = MemoryOntology::builder();
    let breaker = b.class(&format!("{CIM}Breaker"));
    b.profile("http://example.com/out#MyBreaker", Some(breaker));
    let model = b.build();

    let options = GeneratorOptions::default().with_namespace("http://example.com/out#");
    let mut sink = RecordingSink::new();
    SchemaGenerator::new(&model, options).run(&mut sink).unwrap();

    assert_eq!(
        sink.events[0],
        SchemaEvent::Class {
            id: "http://example.com/out#MyBreaker".into(),
            original: format!("{CIM}Breaker"),
        }
    );
    assert_eq!(
        sink.events[1],
        SchemaEvent::Label {
            id: "http://example.com/out#MyBreaker".into(),
            text: "MyBreaker".into(),
        }
    );
}

#[test]
fn unranged_object_property_is_skipped_with_warning() {
    let mut b = MemoryOntology::builder();
    let terminal = b.class(&format!("{CIM}Terminal"));
    let profile = b.profile(&format!("{PROFILE}Terminal"), Some(terminal));
    let prop = b.object_property(&format!("{CIM}Terminal.Owner"), None);
    b.declare(PropertyInfo::new(prop, profile));
    let model = b.build();

    let mut sink = RecordingSink::new();
    let report = SchemaGenerator::new(&model, GeneratorOptions::default())
        .run(&mut sink)
        .unwrap();

    assert_eq!(report.stats.properties, 0);
    assert_eq!(sink.about(&format!("{CIM}Terminal.Owner")).count(), 0);
    let codes: Vec<_> = report.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::W0003]);
    assert!(report.has_warnings());
}

#[test]
fn orphan_profile_reports_property_and_class() {
    let mut b = MemoryOntology::builder();
    let orphan = b.profile(&format!("{PROFILE}Orphan"), None);
    let name = b.datatype_property(&format!("{CIM}IdentifiedObject.name"), None);
    b.declare(PropertyInfo::new(name, orphan));
    let model = b.build();

    let mut sink = RecordingSink::new();
    let report = SchemaGenerator::new(&model, GeneratorOptions::default())
        .run(&mut sink)
        .unwrap();

    let codes: Vec<_> = report.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::W0002, ErrorCode::W0001]);
    assert_eq!(report.dropped_diagnostics, 0);
    assert!(sink.events.is_empty());
}
