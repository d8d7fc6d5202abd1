//! Static field registry
//!
//! One ordered field set per data source. The registry is the single source
//! of truth for which field ids a report may select, filter, or sort on.

use serde::Serialize;

use super::source::DataSource;

/// One selectable attribute of a data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field id as it appears in records and report definitions
    pub id: &'static str,
    /// Human-readable column label
    pub label: &'static str,
}

const EMPLOYEE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor { id: "employee_id", label: "Employee ID" },
    FieldDescriptor { id: "name", label: "Name" },
    FieldDescriptor { id: "email", label: "Email" },
    FieldDescriptor { id: "dept", label: "Department" },
    FieldDescriptor { id: "title", label: "Job Title" },
    FieldDescriptor { id: "salary", label: "Salary" },
    FieldDescriptor { id: "hire_date", label: "Hire Date" },
    FieldDescriptor { id: "status", label: "Status" },
];

const PAYROLL_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor { id: "entry_id", label: "Entry ID" },
    FieldDescriptor { id: "employee_id", label: "Employee ID" },
    FieldDescriptor { id: "period", label: "Pay Period" },
    FieldDescriptor { id: "gross_pay", label: "Gross Pay" },
    FieldDescriptor { id: "net_pay", label: "Net Pay" },
    FieldDescriptor { id: "deductions", label: "Deductions" },
    FieldDescriptor { id: "currency", label: "Currency" },
];

const RECRUITMENT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor { id: "candidate_id", label: "Candidate ID" },
    FieldDescriptor { id: "name", label: "Name" },
    FieldDescriptor { id: "position", label: "Position" },
    FieldDescriptor { id: "stage", label: "Stage" },
    FieldDescriptor { id: "applied_at", label: "Applied" },
    FieldDescriptor { id: "recruiter", label: "Recruiter" },
];

const ATTENDANCE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor { id: "record_id", label: "Record ID" },
    FieldDescriptor { id: "employee_id", label: "Employee ID" },
    FieldDescriptor { id: "date", label: "Date" },
    FieldDescriptor { id: "hours", label: "Hours" },
    FieldDescriptor { id: "kind", label: "Kind" },
];

/// Returns the ordered field set for a data source.
///
/// Total over the closed enum; every source has at least one field.
pub fn fields_for(source: DataSource) -> &'static [FieldDescriptor] {
    match source {
        DataSource::Employees => EMPLOYEE_FIELDS,
        DataSource::Payroll => PAYROLL_FIELDS,
        DataSource::Recruitment => RECRUITMENT_FIELDS,
        DataSource::Attendance => ATTENDANCE_FIELDS,
    }
}

/// Returns the field ids for a data source, in catalog order
pub fn field_ids(source: DataSource) -> impl Iterator<Item = &'static str> {
    fields_for(source).iter().map(|f| f.id)
}

/// Returns true if `field` belongs to the field set of `source`
pub fn has_field(source: DataSource, field: &str) -> bool {
    fields_for(source).iter().any(|f| f.id == field)
}

/// Returns the label for a field id, falling back to the id itself.
///
/// The fallback keeps export headers usable for definitions that reference
/// ids no longer in the catalog.
pub fn label_for(source: DataSource, field: &str) -> &str {
    fields_for(source)
        .iter()
        .find(|f| f.id == field)
        .map(|f| f.label)
        .unwrap_or(field)
}
