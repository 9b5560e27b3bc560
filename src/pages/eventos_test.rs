use super::*;

fn make_evento() -> Evento {
    Evento {
        id: 9,
        titulo: "Feria del Libro".to_owned(),
        descripcion: "Lecturas y charlas".to_owned(),
        direccion: "Corferias".to_owned(),
        tipo_evento: "feria".to_owned(),
        fecha_inicio: "2025-06-01T10:00:00.000Z".to_owned(),
        duracion_horas: 8,
        capacidad_maxima: 500,
        estado: EstadoEvento::Activo,
    }
}

// =============================================================
// Lenient numeric parsing
// =============================================================

#[test]
fn parse_horas_defaults_and_clamps() {
    assert_eq!(parse_horas("4"), 4);
    assert_eq!(parse_horas(" 4 "), 4);
    assert_eq!(parse_horas(""), 1);
    assert_eq!(parse_horas("abc"), 1);
    assert_eq!(parse_horas("0"), 1);
    assert_eq!(parse_horas("-2"), 1);
}

#[test]
fn parse_capacidad_defaults_and_clamps() {
    assert_eq!(parse_capacidad("100"), 100);
    assert_eq!(parse_capacidad(""), 0);
    assert_eq!(parse_capacidad("abc"), 0);
    assert_eq!(parse_capacidad("-5"), 0);
}

#[test]
fn parse_estado_recognizes_finalizado_only() {
    assert_eq!(parse_estado("finalizado"), EstadoEvento::Finalizado);
    assert_eq!(parse_estado("activo"), EstadoEvento::Activo);
    assert_eq!(parse_estado("otro"), EstadoEvento::Activo);
}

// =============================================================
// Form <-> payload mapping
// =============================================================

#[test]
fn payload_attaches_company_id_on_create_only() {
    let form = EventoForm { titulo: "Feria".to_owned(), ..EventoForm::default() };
    assert_eq!(payload_from_form(&form, Some(5)).user_id, Some(5));
    assert_eq!(payload_from_form(&form, None).user_id, None);
}

#[test]
fn payload_parses_numeric_fields_from_inputs() {
    let form = EventoForm {
        duracion_horas: "6".to_owned(),
        capacidad_maxima: "250".to_owned(),
        ..EventoForm::default()
    };
    let payload = payload_from_form(&form, None);
    assert_eq!(payload.duracion_horas, 6);
    assert_eq!(payload.capacidad_maxima, 250);
}

#[test]
fn form_from_evento_truncates_start_for_datetime_input() {
    let form = form_from_evento(&make_evento());
    assert_eq!(form.fecha_inicio, "2025-06-01T10:00");
    assert_eq!(form.duracion_horas, "8");
    assert_eq!(form.capacidad_maxima, "500");
    assert_eq!(form.estado, EstadoEvento::Activo);
}

#[test]
fn default_form_starts_active_with_minimal_duration() {
    let form = EventoForm::default();
    assert_eq!(form.estado, EstadoEvento::Activo);
    assert_eq!(parse_horas(&form.duracion_horas), 1);
    assert_eq!(parse_capacidad(&form.capacidad_maxima), 0);
}
