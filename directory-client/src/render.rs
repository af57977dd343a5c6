/// Plain-text rendering for the terminal front-end

use crate::views::{EmployeeForm, Field, Notice, NoticeKind};
use directory_shared::models::employee::Employee;

const HEADERS: [&str; 4] = ["ID", "NAME", "EMAIL", "POSITION"];

/// Renders employees as an aligned table
pub fn employee_table(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return "No employees found".to_string();
    }

    let rows: Vec<[String; 4]> = employees
        .iter()
        .map(|e| {
            [
                e.id.to_string(),
                e.name.clone(),
                e.email.clone(),
                e.position.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    push_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&format!("{} employee(s)", employees.len()));
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Renders the form's values with inline errors
pub fn form(form: &EmployeeForm) -> String {
    let mut out = String::new();
    for field in Field::ALL {
        out.push_str(&format!("{:<9} {}\n", format!("{}:", field.label()), form.value(field)));
        if let Some(error) = form.error(field) {
            out.push_str(&format!("          ! {}\n", error));
        }
    }
    out
}

pub fn notice(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::Success => format!("[ok] {}", notice.message),
        NoticeKind::Error => format!("[error] {}", notice.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn employee(name: &str, email: &str, position: &str) -> Employee {
        Employee {
            id: Uuid::nil(),
            name: name.to_string(),
            email: email.to_string(),
            position: position.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(employee_table(&[]), "No employees found");
    }

    #[test]
    fn test_table_columns_align() {
        let table = employee_table(&[
            employee("Ann Lee", "ann@x.com", "Engineer"),
            employee("Bo", "bo@averylongdomain.com", "Manager"),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("ID"));
        let position_col = lines[0].find("POSITION").unwrap();
        assert_eq!(lines[2].find("Engineer"), Some(position_col));
        assert_eq!(lines[3].find("Manager"), Some(position_col));
        assert_eq!(lines[4], "2 employee(s)");
    }

    #[test]
    fn test_form_shows_errors_under_fields() {
        let mut employee_form = EmployeeForm::create();
        employee_form.set(Field::Name, "Ann Lee");
        employee_form.validate();

        let rendered = form(&employee_form);

        assert!(rendered.contains("Name:     Ann Lee"));
        assert!(rendered.contains("! Email is required"));
        assert!(rendered.contains("! Position is required"));
    }
}
