//! Motor de estado de mantenimiento
//!
//! Este módulo calcula el estado de cada vehículo a partir del kilometraje
//! acumulado y las fechas de servicio/documentos. Es la única implementación
//! canónica de esta lógica: función pura, sin I/O y sin estado compartido.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Kilómetros entre servicios de mantenimiento
pub const KM_LIMIT: i64 = 5000;

/// Días calendario entre servicios de mantenimiento
pub const DAYS_LIMIT: i64 = 30;

/// Días antes del vencimiento en que el AFOCAT pasa a warning
pub const AFOCAT_WARNING_DAYS: i64 = 30;

/// Días antes del vencimiento en que la revisión técnica pasa a warning
pub const REVIEW_WARNING_DAYS: i64 = 15;

/// Valor de `days` cuando el documento no está registrado.
/// No confundir con un vencimiento real de 1 día.
pub const MISSING_DOCUMENT_DAYS: i64 = -1;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Severidad ordinal: el orden de las variantes define el orden total
/// ok < warning < danger, así que el "peor de tres" es un simple max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "ok" => Some(Severity::Ok),
            "warning" => Some(Severity::Warning),
            "danger" => Some(Severity::Danger),
            _ => None,
        }
    }
}

/// Estado de un documento con fecha de vencimiento (AFOCAT / revisión técnica)
///
/// `days` es con signo: positivo = días restantes, cero o negativo = vencido.
/// Documento ausente: `days = MISSING_DOCUMENT_DAYS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatus {
    pub status: Severity,
    pub days: i64,
}

/// Resultado del cálculo de estado de un vehículo.
///
/// Es una vista derivada: se recalcula en cada lectura y nunca se persiste.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub km_diff: i64,
    pub km_progress: f64,
    pub days_diff: i64,
    pub time_progress: f64,
    pub maint_status: Severity,
    pub afocat: DocumentStatus,
    pub review: DocumentStatus,
    pub general_status: Severity,
}

/// Calcular el estado completo de un vehículo.
///
/// `now` se pasa explícito: quien evalúa una lista de vehículos lo captura
/// una sola vez para que el lote sea internamente consistente.
///
/// `km_diff` negativo está permitido y no se corrige; `days_diff` usa el
/// valor absoluto, por lo que una fecha de servicio futura puntúa igual que
/// una pasada a la misma distancia. Ambos son comportamiento aceptado.
pub fn compute_status(
    current_km: i64,
    last_service_km: i64,
    last_service_date: DateTime<Utc>,
    afocat_date: Option<NaiveDate>,
    review_date: Option<NaiveDate>,
    now: DateTime<Utc>,
) -> StatusReport {
    // Mantenimiento: km y días se evalúan por separado y se combinan con OR
    let km_diff = current_km - last_service_km;
    let km_progress = (km_diff as f64 / KM_LIMIT as f64 * 100.0).min(100.0);

    let elapsed_ms = (now - last_service_date).num_milliseconds().abs();
    let days_diff = (elapsed_ms as f64 / MS_PER_DAY).ceil() as i64;
    let time_progress = (days_diff as f64 / DAYS_LIMIT as f64 * 100.0).min(100.0);

    let maint_status = if km_diff >= KM_LIMIT || days_diff >= DAYS_LIMIT {
        Severity::Danger
    } else if km_diff as f64 >= KM_LIMIT as f64 * 0.9 || days_diff as f64 >= DAYS_LIMIT as f64 * 0.9
    {
        Severity::Warning
    } else {
        Severity::Ok
    };

    let afocat = document_status(afocat_date, AFOCAT_WARNING_DAYS, now);
    let review = document_status(review_date, REVIEW_WARNING_DAYS, now);

    let general_status = maint_status.max(afocat.status).max(review.status);

    StatusReport {
        km_diff,
        km_progress,
        days_diff,
        time_progress,
        maint_status,
        afocat,
        review,
        general_status,
    }
}

/// Estado de un documento según los días que faltan para su vencimiento.
fn document_status(
    expiration: Option<NaiveDate>,
    warning_days: i64,
    now: DateTime<Utc>,
) -> DocumentStatus {
    let Some(date) = expiration else {
        return DocumentStatus {
            status: Severity::Danger,
            days: MISSING_DOCUMENT_DAYS,
        };
    };

    // El documento vence a la medianoche UTC de su fecha
    let expiry = date.and_time(NaiveTime::MIN).and_utc();
    let days = ((expiry - now).num_milliseconds() as f64 / MS_PER_DAY).ceil() as i64;

    let status = if days <= 0 {
        Severity::Danger
    } else if days <= warning_days {
        Severity::Warning
    } else {
        Severity::Ok
    };

    DocumentStatus { status, days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn fresh_documents() -> (Option<NaiveDate>, Option<NaiveDate>) {
        // Documentos lejanos al vencimiento para aislar el estado de mantenimiento
        (Some(date(2025, 6, 30)), Some(date(2025, 6, 30)))
    }

    #[test]
    fn test_km_at_limit_is_danger() {
        // kmDiff = 5000 = KM_LIMIT con solo 29 días transcurridos
        let (afocat, review) = fresh_documents();
        let report = compute_status(10000, 5000, datetime(2024, 6, 1), afocat, review, fixed_now());
        assert_eq!(report.km_diff, 5000);
        assert_eq!(report.days_diff, 29);
        assert_eq!(report.maint_status, Severity::Danger);
    }

    #[test]
    fn test_km_at_ninety_percent_is_warning() {
        // kmDiff = 4500 = 90% del límite, 5 días transcurridos
        let (afocat, review) = fresh_documents();
        let report = compute_status(9500, 5000, datetime(2024, 6, 25), afocat, review, fixed_now());
        assert_eq!(report.km_diff, 4500);
        assert_eq!(report.days_diff, 5);
        assert_eq!(report.maint_status, Severity::Warning);
    }

    #[test]
    fn test_days_alone_can_escalate() {
        // Los días escalan aunque el kilometraje esté al día
        let (afocat, review) = fresh_documents();
        let report = compute_status(100, 100, datetime(2024, 5, 1), afocat, review, fixed_now());
        assert_eq!(report.km_diff, 0);
        assert_eq!(report.maint_status, Severity::Danger);

        // 27 días = 90% de 30
        let report = compute_status(100, 100, datetime(2024, 6, 3), afocat, review, fixed_now());
        assert_eq!(report.days_diff, 27);
        assert_eq!(report.maint_status, Severity::Warning);
    }

    #[test]
    fn test_maintenance_ok_below_thresholds() {
        let (afocat, review) = fresh_documents();
        let report = compute_status(6000, 5000, datetime(2024, 6, 25), afocat, review, fixed_now());
        assert_eq!(report.maint_status, Severity::Ok);
        assert_eq!(report.general_status, Severity::Ok);
    }

    #[test]
    fn test_monotone_escalation_in_km() {
        // ok -> warning -> danger conforme crece kmDiff, umbrales en 0.9x y 1.0x
        let (afocat, review) = fresh_documents();
        let last_service = datetime(2024, 6, 29);
        let mut worst = Severity::Ok;
        for km_diff in [0i64, 1000, 4499, 4500, 4999, 5000, 20000] {
            let report =
                compute_status(5000 + km_diff, 5000, last_service, afocat, review, fixed_now());
            assert!(report.maint_status >= worst, "la severidad no debe bajar");
            worst = report.maint_status;
        }
        let at_89 = compute_status(9499, 5000, last_service, afocat, review, fixed_now());
        assert_eq!(at_89.maint_status, Severity::Ok);
        let at_90 = compute_status(9500, 5000, last_service, afocat, review, fixed_now());
        assert_eq!(at_90.maint_status, Severity::Warning);
        let at_100 = compute_status(10000, 5000, last_service, afocat, review, fixed_now());
        assert_eq!(at_100.maint_status, Severity::Danger);
    }

    #[test]
    fn test_progress_capped_at_100() {
        let (afocat, review) = fresh_documents();
        let report = compute_status(90000, 5000, datetime(2023, 1, 1), afocat, review, fixed_now());
        assert_eq!(report.km_progress, 100.0);
        assert_eq!(report.time_progress, 100.0);
    }

    #[test]
    fn test_negative_km_diff_does_not_panic_nor_clamp() {
        // lastServiceKm > currentKm: entrada basura aceptada, progreso negativo
        let (afocat, review) = fresh_documents();
        let report = compute_status(1000, 6000, datetime(2024, 6, 29), afocat, review, fixed_now());
        assert_eq!(report.km_diff, -5000);
        assert_eq!(report.km_progress, -100.0);
        assert_eq!(report.maint_status, Severity::Ok);
    }

    #[test]
    fn test_future_service_date_scores_like_past() {
        // Regresión: se conserva el valor absoluto de la diferencia de días
        let (afocat, review) = fresh_documents();
        let past = compute_status(100, 100, datetime(2024, 5, 26), afocat, review, fixed_now());
        let future = compute_status(100, 100, datetime(2024, 8, 4), afocat, review, fixed_now());
        assert_eq!(past.days_diff, 35);
        assert_eq!(future.days_diff, 35);
        assert_eq!(past.maint_status, Severity::Danger);
        assert_eq!(future.maint_status, Severity::Danger);
    }

    #[test]
    fn test_afocat_ten_days_ahead_is_warning() {
        let report = compute_status(
            100,
            100,
            fixed_now(),
            Some(date(2024, 7, 10)),
            Some(date(2025, 6, 30)),
            fixed_now(),
        );
        assert_eq!(report.afocat.status, Severity::Warning);
        assert_eq!(report.afocat.days, 10);
    }

    #[test]
    fn test_afocat_expired_ten_days_ago_is_danger() {
        let report = compute_status(
            100,
            100,
            fixed_now(),
            Some(date(2024, 6, 20)),
            Some(date(2025, 6, 30)),
            fixed_now(),
        );
        assert_eq!(report.afocat.status, Severity::Danger);
        assert_eq!(report.afocat.days, -10);
    }

    #[test]
    fn test_missing_afocat_is_danger_with_sentinel() {
        // Sin fecha: centinela -1, distinto de un vencimiento real de 1 día
        let report = compute_status(
            100,
            100,
            fixed_now(),
            None,
            Some(date(2025, 6, 30)),
            fixed_now(),
        );
        assert_eq!(report.afocat.status, Severity::Danger);
        assert_eq!(report.afocat.days, MISSING_DOCUMENT_DAYS);
    }

    #[test]
    fn test_review_uses_its_own_threshold() {
        // 10 días antes del vencimiento es warning para ambos documentos,
        // pero con umbrales independientes (15 vs 30)
        let report = compute_status(
            100,
            100,
            fixed_now(),
            Some(date(2024, 7, 10)),
            Some(date(2024, 7, 10)),
            fixed_now(),
        );
        assert_eq!(report.afocat.days, 10);
        assert_eq!(report.review.days, 10);
        assert_eq!(report.afocat.status, Severity::Warning);
        assert_eq!(report.review.status, Severity::Warning);

        // A 20 días la revisión (umbral 15) ya está ok y AFOCAT sigue en warning
        let report = compute_status(
            100,
            100,
            fixed_now(),
            Some(date(2024, 7, 20)),
            Some(date(2024, 7, 20)),
            fixed_now(),
        );
        assert_eq!(report.afocat.status, Severity::Warning);
        assert_eq!(report.review.status, Severity::Ok);
    }

    #[test]
    fn test_document_boundaries() {
        let now = fixed_now();
        // days = 0 (vence hoy) => danger
        let today = document_status(Some(date(2024, 6, 30)), REVIEW_WARNING_DAYS, now);
        assert_eq!(today.days, 0);
        assert_eq!(today.status, Severity::Danger);
        // days = warning_days exacto => warning
        let at_threshold = document_status(Some(date(2024, 7, 15)), REVIEW_WARNING_DAYS, now);
        assert_eq!(at_threshold.days, 15);
        assert_eq!(at_threshold.status, Severity::Warning);
        // days = warning_days + 1 => ok
        let past_threshold = document_status(Some(date(2024, 7, 16)), REVIEW_WARNING_DAYS, now);
        assert_eq!(past_threshold.days, 16);
        assert_eq!(past_threshold.status, Severity::Ok);
    }

    #[test]
    fn test_partial_days_round_up() {
        // Con "now" a media mañana, la fracción de día se redondea hacia arriba
        let midday = Utc.with_ymd_and_hms(2024, 6, 30, 10, 30, 0).unwrap();
        let doc = document_status(Some(date(2024, 7, 10)), AFOCAT_WARNING_DAYS, midday);
        assert_eq!(doc.days, 10);

        let report = compute_status(
            100,
            100,
            Utc.with_ymd_and_hms(2024, 6, 25, 23, 0, 0).unwrap(),
            Some(date(2025, 6, 30)),
            Some(date(2025, 6, 30)),
            midday,
        );
        // 4 días y 11.5 horas => 5
        assert_eq!(report.days_diff, 5);
    }

    #[test]
    fn test_general_status_is_max_severity() {
        // Mantenimiento ok, AFOCAT vencido => danger general
        let report = compute_status(
            100,
            100,
            fixed_now(),
            Some(date(2024, 1, 1)),
            Some(date(2025, 6, 30)),
            fixed_now(),
        );
        assert_eq!(report.maint_status, Severity::Ok);
        assert_eq!(report.general_status, Severity::Danger);

        // Solo la revisión en warning => warning general
        let report = compute_status(
            100,
            100,
            fixed_now(),
            Some(date(2025, 6, 30)),
            Some(date(2024, 7, 10)),
            fixed_now(),
        );
        assert_eq!(report.general_status, Severity::Warning);

        // Todo en regla => ok general
        let report = compute_status(
            100,
            100,
            fixed_now(),
            Some(date(2025, 6, 30)),
            Some(date(2025, 6, 30)),
            fixed_now(),
        );
        assert_eq!(report.general_status, Severity::Ok);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Ok < Severity::Warning);
        assert!(Severity::Warning < Severity::Danger);
        assert_eq!(Severity::Ok.max(Severity::Danger), Severity::Danger);
    }

    #[test]
    fn test_severity_round_trip() {
        for s in [Severity::Ok, Severity::Warning, Severity::Danger] {
            assert_eq!(Severity::from_str(s.as_str()), Some(s));
        }
        assert_eq!(Severity::from_str("critical"), None);
    }

    #[test]
    fn test_threshold_ordering() {
        assert!(REVIEW_WARNING_DAYS < AFOCAT_WARNING_DAYS);
        assert!(DAYS_LIMIT > 0 && KM_LIMIT > 0);
    }
}
