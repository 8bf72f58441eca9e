//! Gradery console entry point.
//!
//! # Responsibility
//! - Drive login, menu navigation and record entry over `gradery_core`.
//! - Construct services once and pass them explicitly; no global lookup.

use chrono::{NaiveDate, NaiveDateTime};
use gradery_core::{
    Appointment, AppointmentService, CertificateBook, CertificateGrade, Grade, GradeService,
    IcsFileAppointmentRepository, Subject, TextFileGradeRepository, User, WeightedGradeSet,
};
use log::warn;
use std::io::{self, Write};
use std::path::PathBuf;

/// Cipher key used for grade files. Caller-chosen configuration, not a
/// codec constant.
const DEFAULT_CIPHER_KEY: i32 = 3;

/// Menu actions reachable from the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    AddGrade,
    ShowGrade,
    AddAppointment,
    ShowAppointment,
    CalculateCertificate,
}

impl MenuAction {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::AddGrade),
            "2" => Some(Self::ShowGrade),
            "3" => Some(Self::AddAppointment),
            "4" => Some(Self::ShowAppointment),
            "5" => Some(Self::CalculateCertificate),
            _ => None,
        }
    }
}

fn main() {
    let log_dir = std::env::temp_dir().join("gradery-logs");
    if let Err(err) =
        gradery_core::init_logging(gradery_core::default_log_level(), &log_dir.to_string_lossy())
    {
        eprintln!("logging disabled: {err}");
    }

    while let Some(user) = login() {
        run_session(&user);
    }
    println!("Programmende.");
}

/// Login loop. Returns `None` when the user quits (empty username or EOF).
/// An empty password continues as a read-only guest session.
fn login() -> Option<User> {
    loop {
        println!("Hallo, zur Notenverwaltung bitte einloggen (Gastzugang: gast / 1234).");
        println!("Leerer Benutzername beendet das Programm.");
        let username = prompt("Benutzername")?;
        if username.is_empty() {
            return None;
        }
        let password = prompt("Passwort (leer = Gast, nur Lesezugriff)")?;
        if password.is_empty() {
            return Some(User::guest());
        }

        match User::login(&username, &password) {
            Some(user) => return Some(user),
            None => {
                warn!("event=login module=cli status=denied username={username}");
                println!("Login fehlgeschlagen.\n");
            }
        }
    }
}

/// Main menu loop for one logged-in user. Returns on logout.
fn run_session(user: &User) {
    let data_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let grades = GradeService::new(TextFileGradeRepository::for_user(
        &data_dir,
        &user.username,
        DEFAULT_CIPHER_KEY,
    ));
    let appointments = AppointmentService::new(IcsFileAppointmentRepository::for_user(
        &data_dir,
        &user.username,
    ));

    loop {
        println!();
        println!("1. Note eingeben");
        println!("2. Note(n) anzeigen");
        println!("3. Termin eingeben");
        println!("4. Termin(e) anzeigen");
        println!("5. Zeugnisnote(n) berechnen");
        let Some(choice) = prompt("Auswahl") else {
            return;
        };
        let Some(action) = MenuAction::parse(&choice) else {
            println!("Ungültige Auswahl.");
            continue;
        };

        navigate(action, user, &grades, &appointments, || {
            println!("Loading...");
        });

        let Some(next) = prompt("Zurück zum Hauptmenü (H) - Ausloggen (A)") else {
            return;
        };
        if next.eq_ignore_ascii_case("a") {
            return;
        }
    }
}

/// Dispatches one menu action, running the hook before the transition.
fn navigate(
    action: MenuAction,
    user: &User,
    grades: &GradeService<TextFileGradeRepository>,
    appointments: &AppointmentService<IcsFileAppointmentRepository>,
    before_action: impl Fn(),
) {
    before_action();
    match action {
        MenuAction::AddGrade => add_grade(user, grades),
        MenuAction::ShowGrade => show_grade(grades),
        MenuAction::AddAppointment => add_appointment(appointments),
        MenuAction::ShowAppointment => show_appointment(appointments),
        MenuAction::CalculateCertificate => calculate_certificate(user, grades),
    }
}

fn add_grade(user: &User, grades: &GradeService<TextFileGradeRepository>) {
    if !user.role.can_manage_grades() {
        println!("Keine Berechtigung zur Noteneingabe.");
        return;
    }
    let Some(grade) = grade_from_input() else {
        println!("Eingabefehler!");
        return;
    };
    if let Err(err) = grades.add_grade(&grade) {
        println!("Note konnte nicht gespeichert werden: {err}");
    }
}

fn show_grade(grades: &GradeService<TextFileGradeRepository>) {
    match grades.load_grade() {
        Ok(Some(grade)) => {
            println!("Schulfach={}", grade.subject.code());
            println!("Datum={}", grade.date);
            println!("Bezeichnung={}", grade.category);
            println!("Notenwert={}", grade.value);
            if let Some(word) = grade.word_grade() {
                println!("Wortnote={word}");
            }
        }
        Ok(None) => println!("Keine Note gespeichert."),
        Err(err) => println!("Note konnte nicht gelesen werden: {err}"),
    }
}

fn add_appointment(appointments: &AppointmentService<IcsFileAppointmentRepository>) {
    let Some(appointment) = appointment_from_input() else {
        println!("Eingabefehler!");
        return;
    };
    if let Err(err) = appointments.add_appointment(&appointment) {
        println!("Termin konnte nicht gespeichert werden: {err}");
    }
}

fn show_appointment(appointments: &AppointmentService<IcsFileAppointmentRepository>) {
    match appointments.load_appointment() {
        Ok(appointment) => {
            println!("Termin={}", appointment.name);
            println!("Datum={}", appointment.start.format("%Y-%m-%d %H:%M"));
            println!("Enddatum={}", appointment.end.format("%Y-%m-%d %H:%M"));
        }
        Err(err) => println!("Termin konnte nicht gelesen werden: {err}"),
    }
}

/// Derives the sample AWE certificate from exam and oral-participation sets
/// (weighted 0.6 / 0.4) and certifies every book entry.
fn calculate_certificate(user: &User, grades: &GradeService<TextFileGradeRepository>) {
    if !user.role.can_manage_grades() {
        println!("Keine Berechtigung zur Zeugnisberechnung.");
        return;
    }

    let mut exams = WeightedGradeSet::new(0.6);
    exams.push(Grade::new(Subject::Awe, "2020-07-05", "Klausur", 1.3));
    exams.push(Grade::new(Subject::Awe, "2020-07-06", "Klausur", 2.3));

    let mut oral = WeightedGradeSet::new(0.4);
    oral.push(Grade::new(Subject::Awe, "2020-07-05", "SoMi", 1.3));
    if let Ok(Some(stored)) = grades.load_grade() {
        oral.push(stored);
    }

    let certificate: CertificateGrade = grades.calculate_certificate(Subject::Awe, &[exams, oral]);

    let mut book = CertificateBook::new();
    book.add(Box::new(certificate));
    for statement in book.certify_all() {
        println!("{statement}");
    }
}

fn grade_from_input() -> Option<Grade> {
    println!("Wie ist der Name des Schulfaches?");
    println!("(1 = AWE, 2 = DEU, 3 = ENG, 4 = ITS, 5 = PG, 6 = SG, 7 = WPG)");
    let subject = match prompt("Schulfach")?.as_str() {
        "1" => Subject::Awe,
        "2" => Subject::Deu,
        "3" => Subject::Eng,
        "4" => Subject::Its,
        "5" => Subject::Pg,
        "6" => Subject::Sg,
        "7" => Subject::Wpg,
        _ => return None,
    };

    let date = prompt("Datum (JJJJ-MM-TT)")?;
    NaiveDate::parse_from_str(&date, "%Y-%m-%d").ok()?;

    let category = prompt("Notentyp (Klausur/SoMi)")?;

    let value: f64 = prompt("Notenwert (1-6)")?.parse().ok()?;

    Some(Grade::new(subject, date, category, value))
}

fn appointment_from_input() -> Option<Appointment> {
    let name = prompt("Wie ist der Name des Termins?")?;
    let date = prompt("Wann ist der Termin? (JJJJ-MM-TT HH:MM)")?;
    let start = NaiveDateTime::parse_from_str(&date, "%Y-%m-%d %H:%M")
        .ok()?
        .and_utc();
    Some(Appointment::new(name, start))
}

/// Prompts for one trimmed input line. `None` on EOF or read failure.
fn prompt(label: &str) -> Option<String> {
    print!("{label}: ");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::MenuAction;

    #[test]
    fn menu_actions_parse_from_digits() {
        assert_eq!(MenuAction::parse("1"), Some(MenuAction::AddGrade));
        assert_eq!(MenuAction::parse("5"), Some(MenuAction::CalculateCertificate));
        assert_eq!(MenuAction::parse("9"), None);
        assert_eq!(MenuAction::parse(""), None);
    }
}
