use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use cs_core::TermSlot;
use cs_model::{
    AxialGaps, CableType, Connection, CoreDims, Ducts, RadialSpacer, Terminal, Transformer,
    TurnCounts, TurnDefinition, Winding, WindingType,
};
use cs_project::{
    ProjectFile, ValidationError, load_json, load_yaml, save_json, save_yaml, validate_project,
};

fn unique_temp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("{}_{}", nanos, name))
}

fn sample_project() -> ProjectFile {
    let mut tx = Transformer::new(
        3,
        60.0,
        65.0,
        CoreDims {
            diameter_mm: 520.0,
            window_height_mm: 2200.0,
        },
    );
    tx.set_terminal(
        TermSlot::new(1).unwrap(),
        Some(Terminal {
            name: "HV".to_string(),
            voltage_v: 115_000.0,
            va: 50_000_000.0,
            connection: Connection::Wye,
            current_direction: 1,
            andersen_number: 1,
        }),
    );
    tx.add_winding(Winding {
        winding_type: WindingType::Disc,
        is_spiral: false,
        is_double_stack: false,
        turns: TurnCounts {
            min: 380.0,
            nom: 400.0,
            max: 420.0,
        },
        elec_height_mm: 1900.0,
        axial_sections: 6,
        radial_spacer: RadialSpacer {
            thickness_mm: 4.0,
            width_mm: 40.0,
        },
        axial_columns: 14,
        radial_sections: 2,
        radial_insulation_mm: 0.5,
        ducts: Ducts {
            count: 1,
            dim_mm: 6.0,
        },
        radial_supports: 8,
        turn_def: TurnDefinition {
            cable_type: CableType::Ctc,
            strand_axial_mm: 8.0,
            strand_radial_mm: 3.0,
            num_ctc_strands: 9,
            num_cables_axial: 1,
            num_cables_radial: 1,
            strand_insulation_mm: 0.5,
            cable_insulation_mm: 1.2,
            internal_insulation_mm: 0.0,
        },
        axial_gaps: AxialGaps {
            center_mm: 40.0,
            bottom_mm: 12.0,
            top_mm: 12.0,
        },
        bottom_edge_pack_mm: 5.0,
        coil_id_mm: 860.0,
        radial_overbuild_pct: 1.5,
        ground_clearance_mm: 25.0,
        terminal_number: 1,
        layers: Vec::new(),
    });

    ProjectFile {
        version: 1,
        name: "Sample 50 MVA".to_string(),
        transformer: tx,
    }
}

#[test]
fn roundtrip_yaml_is_lossless() {
    let project = sample_project();
    validate_project(&project).unwrap();

    let path = unique_temp_path("cs_project_roundtrip.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();
    assert_eq!(project, loaded);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn roundtrip_json_is_lossless() {
    let project = sample_project();

    let path = unique_temp_path("cs_project_roundtrip.json");
    save_json(&path, &project).unwrap();
    let loaded = load_json(&path).unwrap();
    assert_eq!(project, loaded);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn load_migrates_old_versions() {
    let mut project = sample_project();
    project.version = 0;

    let path = unique_temp_path("cs_project_v0.json");
    // Bypass save validation's migration-free path by writing directly.
    std::fs::write(&path, serde_json::to_string(&project).unwrap()).unwrap();
    let loaded = load_json(&path).unwrap();
    assert_eq!(loaded.version, cs_project::LATEST_VERSION);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_rejects_invalid_models() {
    let mut project = sample_project();
    // Break the turn-count ordering.
    let winding_id = project.transformer.windings().next().unwrap().0;
    project
        .transformer
        .winding_mut(winding_id)
        .unwrap()
        .turns
        .nom = 500.0;

    let path = unique_temp_path("cs_project_invalid.yaml");
    let err = save_yaml(&path, &project).unwrap_err();
    assert!(matches!(
        err,
        cs_project::ProjectError::Validation(ValidationError::InvalidValue { .. })
    ));
    assert!(!path.exists());
}

#[test]
fn dangling_terminal_reference_is_rejected() {
    let mut project = sample_project();
    project.transformer.set_terminal(TermSlot::new(1).unwrap(), None);

    let err = validate_project(&project).unwrap_err();
    assert!(matches!(err, ValidationError::MissingReference { .. }));
}
