//! Deterministic demo data the dashboard starts from.

use chrono::{Datelike, Months, NaiveDate, TimeZone, Utc};

use crate::database::DataSet;
use crate::models::{
    Athlete, Belt, Claim, ClaimStatus, EventStatus, EventType, KarateEvent, RepresentedType, Role,
    School, User,
};

const SCHOOLS: &[(&str, &str, Option<&str>)] = &[
    ("antonio-diaz-dojo", "Antonio Díaz Dojo", Some("https://storage.googleapis.com/proudcity/antoniokenpo/uploads/2020/07/antonio-diaz-logo.png")),
    ("shito-ryu-karate", "Shito-Ryu Karate", Some("https://www.shitokai.com/images/logo_ishimi_shitoryu_karatedo.jpg")),
    ("dojo-okinawa", "Dojo Okinawa", Some("https://dojookinawa.com/wp-content/uploads/2020/03/logo-okinawa-min.png")),
    ("bushido-vzla", "Bushido Vzla", Some("https://bushidovzla.files.wordpress.com/2016/09/cropped-bushido-vzla-logo-300.png")),
    ("shotokan-caracas", "Shotokan Caracas", Some("https://www.oskivenezuela.com/wp-content/uploads/2016/02/logo_oskil.png")),
    ("gensei-ryu-miranda", "Gensei-Ryu Miranda", Some("https://www.genseiryu.com.ve/images/logo.png")),
    ("wado-ryu-valencia", "Wado-Ryu Valencia", None),
    ("kyokushin-maracay", "Kyokushin Maracay", Some("https://www.ikakvenezuela.com/images/logo-iko-kyokushinkaikan-venezuela.png")),
    ("shorin-ryu-barquisimeto", "Shorin-Ryu Barquisimeto", Some("https://www.kobayashikaratedo.com/images/logos/logo-kobayashi-ryu-kyudokan-de-venezuela.png")),
    ("goju-ryu-merida", "Goju-Ryu Mérida", Some("https://gojuryu.org.ve/wp-content/uploads/2021/08/LOGO-OGKK-DE-VENEZUELA-version-final-transparente-296x300.png")),
    ("isshin-ryu-san-cristobal", "Isshin-Ryu San Cristóbal", Some("https://i.pinimg.com/736x/8f/9a/c6/8f9ac653856b68260b94427500d4586d.jpg")),
    ("kenpo-karate-zulia", "Kenpo Karate Zulia", None),
    ("ryuei-ryu-anzoategui", "Ryuei-Ryu Anzoátegui", Some("https://www.ryueiryu.com/en/common/images/h_logo.gif")),
    ("shudokan-bolivar", "Shudokan Bolívar", Some("https://shudokan.com.ve/wp-content/uploads/2020/09/logo-shudokan-3.png")),
    ("yoshukai-sucre", "Yoshukai Sucre", Some("https://yoshukai.org/wp-content/uploads/2019/11/YK-Logo-Web-Transparent.png")),
];

const FIRST_NAMES: &[&str] = &[
    "Pedro", "Ana", "Carlos", "Valentina", "Luis", "Mariana", "Diego", "Camila", "Andrés",
    "Sofía", "Juan", "Gabriela", "Elena", "John", "Daniel", "Lucía", "Mateo", "Isabella",
    "Javier", "Valeria", "Ricardo", "Paula", "Miguel", "Daniela", "Alejandro",
];

const LAST_NAMES: &[&str] = &[
    "Salas", "González", "Hernández", "Romero", "Martínez", "Pinto", "Suárez", "López",
    "García", "Méndez", "Ramírez", "Rojas", "Williams", "Smith", "Díaz", "Moreno", "Castillo",
    "Peña", "Acosta", "Gil", "Soto", "Rivas", "Alvarez", "Torres", "Mendoza",
];

/// Registration years and how many athletes each one contributes.
const COHORTS: &[(i32, u32)] = &[(2025, 50), (2024, 25), (2023, 25), (2022, 25)];

pub fn dataset(today: NaiveDate) -> DataSet {
    let schools = schools();
    let athletes = COHORTS
        .iter()
        .flat_map(|&(year, count)| generate_athletes(&schools, year, count))
        .collect();

    DataSet {
        athletes,
        schools,
        events: events(today),
        claims: claims(),
        users: users(),
    }
}

pub fn schools() -> Vec<School> {
    SCHOOLS
        .iter()
        .map(|&(value, label, logo)| School {
            value: value.to_string(),
            label: label.to_string(),
            logo_url: logo.map(String::from),
            address: None,
            master_id: None,
        })
        .collect()
}

pub fn generate_athletes(schools: &[School], year: i32, count: u32) -> Vec<Athlete> {
    (1..=count)
        .map(|i| {
            let idx = i as usize;
            let school = &schools[idx % schools.len()];

            // Points fall linearly with the index and bottom out at zero.
            let ranking = 1500u32.saturating_sub(65 * i);

            let oro = match i {
                1 => 10,
                2 => 8,
                3 => 6,
                4..=10 => 10 - i,
                _ => 0,
            };
            let plata = (15 - i as i64).rem_euclid(5) as u32;
            let bronce = (15 - i as i64).rem_euclid(4) as u32;

            let registration_date = Utc
                .with_ymd_and_hms(year, i % 12 + 1, i % 28 + 1, 10, 0, 0)
                .single()
                .unwrap_or_default();

            Athlete {
                id: year as u32 * 100 + i,
                nombres: FIRST_NAMES[idx % FIRST_NAMES.len()].to_string(),
                apellidos: LAST_NAMES[idx % LAST_NAMES.len()].to_string(),
                edad: 10 + i % 15,
                escuela: school.label.clone(),
                cinturon: Belt::ALL[idx % Belt::ALL.len()],
                ranking,
                cedula: format!("V-{}{}", 20 + i % 10, 100_000 + i),
                oro,
                plata,
                bronce,
                logo_url: school.logo_url.clone(),
                registration_date,
            }
        })
        .collect()
}

/// `day` of the month reached by moving `year_offset` years and `months_ahead` months
/// from `month` (or from `today`'s month when `None`).
fn relative_date(today: NaiveDate, year_offset: i32, month: Option<u32>, months_ahead: u32, day: u32) -> NaiveDate {
    let base = NaiveDate::from_ymd_opt(today.year() + year_offset, month.unwrap_or(today.month()), 1)
        .unwrap_or(today);
    let shifted = base.checked_add_months(Months::new(months_ahead)).unwrap_or(base);
    shifted.with_day(day).unwrap_or(shifted)
}

fn event(
    id: &str,
    name: &str,
    description: &str,
    date: NaiveDate,
    location: &str,
    event_type: EventType,
    status: EventStatus,
) -> KarateEvent {
    KarateEvent {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        date,
        location: location.to_string(),
        event_type,
        status,
    }
}

pub fn events(today: NaiveDate) -> Vec<KarateEvent> {
    use EventStatus::*;
    use EventType::*;

    let this_year = |month, day| relative_date(today, 0, Some(month), 0, day);
    let this_month = |ahead, day| relative_date(today, 0, None, ahead, day);

    vec![
        event("evt-001", "Campeonato Nacional Juvenil", "El campeonato nacional que reúne a los mejores talentos juveniles del país.", this_year(8, 15), "Caracas, Distrito Capital", Competition, Scheduled),
        event("evt-002", "Seminario con Antonio Díaz", "Oportunidad única para aprender del múltiple campeón mundial de kata.", this_year(9, 5), "Valencia, Carabobo", Seminar, Scheduled),
        event("evt-002-repeat", "Seminario con Antonio Díaz", "Oportunidad única para aprender del múltiple campeón mundial de kata.", this_year(9, 6), "Valencia, Carabobo", Seminar, Scheduled),
        event("evt-003", "Torneo \"Copa Bushido\"", "Competencia abierta para todas las categorías en la modalidad de kumite.", this_year(7, 20), "Maracay, Aragua", Competition, Ongoing),
        event("evt-004", "Copa Internacional Simón Bolívar", "Prestigioso torneo con participación de atletas de toda Latinoamérica.", relative_date(today, -1, Some(11), 0, 10), "Caracas, Distrito Capital", Competition, Finished),
        event("evt-005", "Exhibición de Artes Marciales", "Muestra de las diferentes disciplinas de artes marciales practicadas en el país.", this_year(6, 1), "Barquisimeto, Lara", Exhibition, Finished),
        event("evt-006", "Campamento de Verano", "Campamento intensivo de entrenamiento para atletas de alto rendimiento.", this_year(8, 1), "Mérida, Mérida", Seminar, Scheduled),
        event("evt-007", "Torneo Regional de Los Andes", "Competencia para los dojos de la región andina.", this_year(10, 26), "San Cristóbal, Táchira", Competition, Scheduled),
        event("evt-008", "Examen de Grado Dan", "Examen de grado para aspirantes a cinturón negro y danes superiores.", this_year(12, 7), "Caracas, Distrito Capital", Seminar, Scheduled),
        event("evt-009", "Campeonato Estadal de Karate", "El campeonato que reúne a los mejores talentos del estado.", this_year(5, 15), "Caracas, Distrito Capital", Competition, Finished),
        event("evt-010", "Campeonato Nacional Infantil", "El campeonato que reúne a los mejores talentos infantiles del país.", this_year(3, 15), "Caracas, Distrito Capital", Competition, Cancelled),
        event("evt-011", "Curso de Arbitraje", "Curso de formación y actualización para árbitros de karate.", this_year(7, 10), "Online", Seminar, Scheduled),
        event("evt-012", "Gasshuku Nacional de Verano", "Encuentro nacional para entrenamiento conjunto y convivencia.", this_year(8, 25), "Higuerote, Miranda", Seminar, Scheduled),
        event("evt-013", "Competencia de Kata y Kumite", "Competencia interna del Dojo Okinawa.", this_month(0, 10), "Dojo Okinawa", Competition, Scheduled),
        event("evt-014", "Exhibición Aniversario", "Celebración del aniversario de Shito-Ryu Karate.", this_month(0, 22), "Shito-Ryu Karate", Exhibition, Scheduled),
        event("evt-015", "Seminario de Defensa Personal", "Taller práctico de técnicas de defensa personal.", this_month(1, 5), "Gimnasio Municipal", Seminar, Scheduled),
    ]
}

fn claim(
    id: &str,
    representative: (&str, &str),
    represented: (&str, &str, RepresentedType),
    subject: &str,
    description: &str,
    status: ClaimStatus,
    submission_date: NaiveDate,
) -> Claim {
    Claim {
        id: id.to_string(),
        representative_id: representative.0.to_string(),
        representative_name: representative.1.to_string(),
        represented_id: represented.0.to_string(),
        represented_name: represented.1.to_string(),
        represented_type: represented.2,
        subject: subject.to_string(),
        description: description.to_string(),
        status,
        submission_date,
    }
}

pub fn claims() -> Vec<Claim> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

    vec![
        claim(
            "claim-001",
            ("1", "Admin Prueba"),
            ("202525", "Pedro Salas", RepresentedType::Student),
            "Puntuación incorrecta en torneo",
            "La puntuación de mi representado en la final de kumite no fue registrada correctamente.",
            ClaimStatus::Submitted,
            date(2024, 7, 21),
        ),
        claim(
            "claim-002",
            ("1", "Admin Prueba"),
            ("antonio-diaz-dojo", "Antonio Díaz Dojo", RepresentedType::School),
            "Problema con la inscripción al evento",
            "No aparecen todos nuestros atletas inscritos en el próximo evento.",
            ClaimStatus::InProgress,
            date(2024, 7, 19),
        ),
        claim(
            "claim-003",
            ("202505", "Mariana Pinto"),
            ("202502", "Carlos Hernández", RepresentedType::Student),
            "Cambio de categoría",
            "Solicito el cambio de categoría de mi representado por error en la edad.",
            ClaimStatus::Resolved,
            date(2024, 6, 10),
        ),
    ]
}

fn user(id: &str, first_name: &str, last_name: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!("{}.{}@example.com", first_name.to_lowercase(), last_name.to_lowercase()),
        role,
        cedula: None,
        date_of_birth: None,
        school_id: None,
        belt: None,
        ranking: None,
        representative_id: None,
    }
}

pub fn users() -> Vec<User> {
    let mut master = user("202503", "Valentina", "Romero", Role::Master);
    master.school_id = Some("bushido-vzla".to_string());
    master.belt = Some(Belt::Black);

    let mut student = user("202501", "Ana", "González", Role::Student);
    student.cedula = Some("V-21100001".to_string());
    student.date_of_birth = NaiveDate::from_ymd_opt(2014, 2, 2);
    student.school_id = Some("shito-ryu-karate".to_string());
    student.belt = Some(Belt::Yellow);
    student.ranking = Some(1435);
    student.representative_id = Some("202505".to_string());

    vec![
        user("1", "Admin", "Prueba", Role::Admin),
        master,
        user("202505", "Mariana", "Pinto", Role::Representative),
        student,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 18).unwrap()
    }

    #[test]
    fn test_cohort_sizes() {
        let data = dataset(today());
        assert_eq!(data.athletes.len(), 125);
        assert_eq!(data.schools.len(), 15);
        assert_eq!(
            data.athletes.iter().filter(|a| a.registration_year() == 2025).count(),
            50
        );
    }

    #[test]
    fn test_generator_rules() {
        let athletes = generate_athletes(&schools(), 2025, 50);

        let first = &athletes[0];
        assert_eq!(first.id, 202501);
        assert_eq!(first.nombres, "Ana");
        assert_eq!(first.apellidos, "González");
        assert_eq!(first.escuela, "Shito-Ryu Karate");
        assert_eq!(first.ranking, 1435);
        assert_eq!((first.oro, first.plata, first.bronce), (10, 4, 2));
        assert_eq!(first.edad, 11);
        assert_eq!(first.cinturon, Belt::Yellow);
        assert_eq!(first.cedula, "V-21100001");

        let fourth = &athletes[3];
        assert_eq!(fourth.oro, 6);

        let last = &athletes[49];
        assert_eq!(last.ranking, 0);
        assert_eq!(last.oro, 0);
    }

    #[test]
    fn test_generated_values_are_well_formed() {
        let athletes = generate_athletes(&schools(), 2024, 25);
        for athlete in &athletes {
            assert!(athlete.plata < 5);
            assert!(athlete.bronce < 4);
            assert_eq!(athlete.registration_year(), 2024);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(dataset(today()), dataset(today()));
    }

    #[test]
    fn test_relative_event_dates() {
        let events = events(today());
        let by_id = |id: &str| events.iter().find(|e| e.id == id).unwrap().date;

        assert_eq!(by_id("evt-001"), NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
        assert_eq!(by_id("evt-004"), NaiveDate::from_ymd_opt(2024, 11, 10).unwrap());
        assert_eq!(by_id("evt-013"), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(by_id("evt-015"), NaiveDate::from_ymd_opt(2025, 4, 5).unwrap());
    }

    #[test]
    fn test_next_month_wraps_year() {
        let december = NaiveDate::from_ymd_opt(2025, 12, 2).unwrap();
        let events = events(december);
        let seminar = events.iter().find(|e| e.id == "evt-015").unwrap();
        assert_eq!(seminar.date, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
    }
}
