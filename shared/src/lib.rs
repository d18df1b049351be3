use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Maximum number of child sub-forms the employee form accepts
pub const MAX_CHILDREN: usize = 2;

/// Border color applied to a required field left empty
pub const ERROR_BORDER_COLOR: &str = "#e74c3c";

/// Border color applied to a required field that has a value
pub const VALID_BORDER_COLOR: &str = "#ddd";

/// Log verbosity for the browser console logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Tunables for the form controller. Every field has a default so a partial
/// JSON override is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub max_children: usize,
    pub flash_display_ms: u32,
    pub flash_fade_ms: u32,
    pub error_border_color: String,
    pub valid_border_color: String,
    pub log_level: LogLevel,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_children: MAX_CHILDREN,
            flash_display_ms: 5000, // 5 seconds on screen
            flash_fade_ms: 300,     // matches the CSS opacity transition
            error_border_color: ERROR_BORDER_COLOR.to_string(),
            valid_border_color: VALID_BORDER_COLOR.to_string(),
            log_level: LogLevel::Info,
        }
    }
}

impl FormConfig {
    pub fn flash_timeline(&self) -> FlashTimeline {
        FlashTimeline {
            display_ms: self.flash_display_ms,
            fade_ms: self.flash_fade_ms,
        }
    }
}

/// Marital status as selected in the `marital_status` dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Married,
    Divorced,
    Single,
    Widowed,
    /// Anything else, including the empty placeholder option
    Unspecified(String),
}

impl MaritalStatus {
    /// Parse a raw select value. Never fails: unknown values are kept verbatim.
    pub fn from_select_value(value: &str) -> Self {
        match value {
            "Married" => MaritalStatus::Married,
            "Divorced" => MaritalStatus::Divorced,
            "Single" => MaritalStatus::Single,
            "Widowed" => MaritalStatus::Widowed,
            other => MaritalStatus::Unspecified(other.to_string()),
        }
    }

    pub fn as_select_value(&self) -> &str {
        match self {
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Single => "Single",
            MaritalStatus::Widowed => "Widowed",
            MaritalStatus::Unspecified(raw) => raw,
        }
    }

    pub fn visibility(&self) -> FormSectionVisibility {
        FormSectionVisibility::for_status(self)
    }
}

impl Default for MaritalStatus {
    fn default() -> Self {
        MaritalStatus::Unspecified(String::new())
    }
}

/// Which optional sections of the form are shown. Always derived from the
/// marital status, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSectionVisibility {
    pub spouse_visible: bool,
    pub children_visible: bool,
}

impl FormSectionVisibility {
    pub fn for_status(status: &MaritalStatus) -> Self {
        match status {
            MaritalStatus::Married => Self {
                spouse_visible: true,
                children_visible: true,
            },
            MaritalStatus::Divorced => Self {
                spouse_visible: false,
                children_visible: true,
            },
            _ => Self {
                spouse_visible: false,
                children_visible: false,
            },
        }
    }

    /// CSS `display` value for the spouse section container
    pub fn spouse_display(&self) -> &'static str {
        display_value(self.spouse_visible)
    }

    /// CSS `display` value for the children section container
    pub fn children_display(&self) -> &'static str {
        display_value(self.children_visible)
    }
}

fn display_value(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Parse a select value; the empty placeholder maps to `None`.
    pub fn from_select_value(value: &str) -> Option<Gender> {
        value.parse().ok()
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identity of a child sub-form. Display numbering is positional and
/// changes on removal; this id does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChildRecordId(Uuid);

impl ChildRecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ChildRecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChildRecordId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields of a child sub-form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChildField {
    FullName,
    Gender,
    DateOfBirth,
    PhoneNumber,
}

impl ChildField {
    pub const REQUIRED: [ChildField; 3] =
        [ChildField::FullName, ChildField::Gender, ChildField::DateOfBirth];

    /// Submitted `name` attribute. The brackets make the host form post all
    /// children as parallel arrays.
    pub fn input_name(&self) -> &'static str {
        match self {
            ChildField::FullName => "family_name[]",
            ChildField::Gender => "family_relationship[]",
            ChildField::DateOfBirth => "family_dob[]",
            ChildField::PhoneNumber => "family_phone[]",
        }
    }

    /// DOM id of the input for the child shown at `display_index` (1-based)
    pub fn dom_id(&self, display_index: usize) -> String {
        let stem = match self {
            ChildField::FullName => "family_name",
            ChildField::Gender => "family_relationship",
            ChildField::DateOfBirth => "family_dob",
            ChildField::PhoneNumber => "family_phone",
        };
        format!("{}_{}", stem, display_index)
    }
}

/// One child sub-form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildRecord {
    pub id: ChildRecordId,
    pub full_name: String,
    pub gender: Option<Gender>,
    /// ISO date (YYYY-MM-DD) as produced by `<input type="date">`
    pub date_of_birth: String,
    pub phone_number: String,
}

impl ChildRecord {
    fn empty() -> Self {
        Self {
            id: ChildRecordId::new(),
            full_name: String::new(),
            gender: None,
            date_of_birth: String::new(),
            phone_number: String::new(),
        }
    }

    /// Current raw value of a field, as the input would report it
    pub fn value(&self, field: ChildField) -> &str {
        match field {
            ChildField::FullName => &self.full_name,
            ChildField::Gender => self.gender.map(|g| g.as_str()).unwrap_or(""),
            ChildField::DateOfBirth => &self.date_of_birth,
            ChildField::PhoneNumber => &self.phone_number,
        }
    }

    pub fn set_value(&mut self, field: ChildField, value: &str) {
        match field {
            ChildField::FullName => self.full_name = value.to_string(),
            ChildField::Gender => self.gender = Gender::from_select_value(value),
            ChildField::DateOfBirth => self.date_of_birth = value.to_string(),
            ChildField::PhoneNumber => self.phone_number = value.to_string(),
        }
    }

    fn clear(&mut self) {
        self.full_name.clear();
        self.gender = None;
        self.date_of_birth.clear();
        self.phone_number.clear();
    }
}

/// Errors from child-list operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChildListError {
    #[error("You can add a maximum of {capacity} children.")]
    CapacityReached { capacity: usize },
    #[error("No child record with id {0}")]
    UnknownRecord(ChildRecordId),
}

/// Ordered, bounded list of child sub-forms. The list length is the only
/// record count; display numbers are always `position + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildRecordList {
    records: Vec<ChildRecord>,
    capacity: usize,
}

impl Default for ChildRecordList {
    fn default() -> Self {
        Self::new(MAX_CHILDREN)
    }
}

impl ChildRecordList {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Append an empty record. Rejected without any change when full.
    pub fn add(&mut self) -> Result<ChildRecordId, ChildListError> {
        if self.is_full() {
            return Err(ChildListError::CapacityReached {
                capacity: self.capacity,
            });
        }
        let record = ChildRecord::empty();
        let id = record.id;
        self.records.push(record);
        Ok(id)
    }

    /// Remove a record by id. Later records move up one position, which
    /// renumbers them.
    pub fn remove(&mut self, id: ChildRecordId) -> Result<ChildRecord, ChildListError> {
        let position = self
            .position(id)
            .ok_or(ChildListError::UnknownRecord(id))?;
        Ok(self.records.remove(position))
    }

    pub fn update(
        &mut self,
        id: ChildRecordId,
        field: ChildField,
        value: &str,
    ) -> Result<(), ChildListError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ChildListError::UnknownRecord(id))?;
        record.set_value(field, value);
        Ok(())
    }

    /// Blank every record's values, then drop all records
    pub fn clear(&mut self) {
        for record in &mut self.records {
            record.clear();
        }
        self.records.clear();
    }

    pub fn get(&self, id: ChildRecordId) -> Option<&ChildRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn position(&self, id: ChildRecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// 1-based display number of a record
    pub fn display_index(&self, id: ChildRecordId) -> Option<usize> {
        self.position(id).map(|p| p + 1)
    }

    pub fn title_for(display_index: usize) -> String {
        format!("Child {}", display_index)
    }

    pub fn titles(&self) -> Vec<String> {
        (1..=self.records.len()).map(Self::title_for).collect()
    }

    /// Records paired with their 1-based display number
    pub fn iter_numbered(&self) -> impl Iterator<Item = (usize, &ChildRecord)> {
        self.records.iter().enumerate().map(|(i, r)| (i + 1, r))
    }

    pub fn records(&self) -> &[ChildRecord] {
        &self.records
    }
}

/// Always-visible employee fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeField {
    EmployeeId,
    FullName,
    Email,
    Phone,
    DateOfBirth,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 5] = [
        EmployeeField::EmployeeId,
        EmployeeField::FullName,
        EmployeeField::Email,
        EmployeeField::Phone,
        EmployeeField::DateOfBirth,
    ];

    pub fn input_name(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "employee_id",
            EmployeeField::FullName => "name",
            EmployeeField::Email => "email",
            EmployeeField::Phone => "phone",
            EmployeeField::DateOfBirth => "dob",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDetails {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
}

impl EmployeeDetails {
    pub fn value(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::EmployeeId => &self.employee_id,
            EmployeeField::FullName => &self.full_name,
            EmployeeField::Email => &self.email,
            EmployeeField::Phone => &self.phone,
            EmployeeField::DateOfBirth => &self.date_of_birth,
        }
    }

    pub fn set_value(&mut self, field: EmployeeField, value: &str) {
        let slot = match field {
            EmployeeField::EmployeeId => &mut self.employee_id,
            EmployeeField::FullName => &mut self.full_name,
            EmployeeField::Email => &mut self.email,
            EmployeeField::Phone => &mut self.phone,
            EmployeeField::DateOfBirth => &mut self.date_of_birth,
        };
        *slot = value.to_string();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpouseField {
    FullName,
    Gender,
    DateOfBirth,
    PhoneNumber,
}

impl SpouseField {
    /// Married employees must give full spouse details; phone stays optional
    pub const REQUIRED: [SpouseField; 3] =
        [SpouseField::FullName, SpouseField::Gender, SpouseField::DateOfBirth];

    pub fn input_name(&self) -> &'static str {
        match self {
            SpouseField::FullName => "spouse_name",
            SpouseField::Gender => "spouse_gender",
            SpouseField::DateOfBirth => "spouse_dob",
            SpouseField::PhoneNumber => "spouse_phone",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpouseDetails {
    pub full_name: String,
    pub gender: Option<Gender>,
    pub date_of_birth: String,
    pub phone_number: String,
}

impl SpouseDetails {
    pub fn value(&self, field: SpouseField) -> &str {
        match field {
            SpouseField::FullName => &self.full_name,
            SpouseField::Gender => self.gender.map(|g| g.as_str()).unwrap_or(""),
            SpouseField::DateOfBirth => &self.date_of_birth,
            SpouseField::PhoneNumber => &self.phone_number,
        }
    }

    pub fn set_value(&mut self, field: SpouseField, value: &str) {
        match field {
            SpouseField::FullName => self.full_name = value.to_string(),
            SpouseField::Gender => self.gender = Gender::from_select_value(value),
            SpouseField::DateOfBirth => self.date_of_birth = value.to_string(),
            SpouseField::PhoneNumber => self.phone_number = value.to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        *self == SpouseDetails::default()
    }
}

/// Identifies any field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    Employee(EmployeeField),
    MaritalStatus,
    Spouse(SpouseField),
    Child { id: ChildRecordId, field: ChildField },
}

/// A field that must be non-empty, with its current value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredField {
    pub key: FieldKey,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldStatus {
    Valid,
    Invalid,
}

impl FieldStatus {
    pub fn border_color<'a>(&self, config: &'a FormConfig) -> &'a str {
        match self {
            FieldStatus::Valid => &config.valid_border_color,
            FieldStatus::Invalid => &config.error_border_color,
        }
    }
}

/// Outcome of a required-field check, one status per checked field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequiredFieldsReport {
    pub statuses: Vec<(FieldKey, FieldStatus)>,
}

impl RequiredFieldsReport {
    pub fn is_valid(&self) -> bool {
        self.statuses
            .iter()
            .all(|(_, status)| *status == FieldStatus::Valid)
    }

    pub fn status_of(&self, key: &FieldKey) -> Option<FieldStatus> {
        self.statuses
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, status)| *status)
    }

    /// Border color for a checked field; `None` if the field wasn't checked
    pub fn border_color<'a>(&self, key: &FieldKey, config: &'a FormConfig) -> Option<&'a str> {
        self.status_of(key).map(|status| status.border_color(config))
    }

    pub fn invalid_fields(&self) -> Vec<FieldKey> {
        self.statuses
            .iter()
            .filter(|(_, status)| *status == FieldStatus::Invalid)
            .map(|(key, _)| *key)
            .collect()
    }
}

/// Mark each field valid or invalid depending on whether its trimmed value is empty
pub fn validate_required_fields(fields: &[RequiredField]) -> RequiredFieldsReport {
    let statuses = fields
        .iter()
        .map(|field| {
            let status = if field.value.trim().is_empty() {
                FieldStatus::Invalid
            } else {
                FieldStatus::Valid
            };
            (field.key, status)
        })
        .collect();
    RequiredFieldsReport { statuses }
}

/// Complete state of the employee form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyForm {
    pub employee: EmployeeDetails,
    pub marital_status: MaritalStatus,
    pub spouse: SpouseDetails,
    pub children: ChildRecordList,
}

impl FamilyForm {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            children: ChildRecordList::new(config.max_children),
            ..Self::default()
        }
    }

    pub fn visibility(&self) -> FormSectionVisibility {
        self.marital_status.visibility()
    }

    /// Switch marital status, clearing whatever the new status hides
    pub fn set_marital_status(&mut self, status: MaritalStatus) -> FormSectionVisibility {
        self.marital_status = status;
        let visibility = self.visibility();
        if !visibility.spouse_visible {
            self.spouse = SpouseDetails::default();
        }
        if !visibility.children_visible {
            self.children.clear();
        }
        visibility
    }

    pub fn add_child(&mut self) -> Result<ChildRecordId, ChildListError> {
        self.children.add()
    }

    pub fn remove_child(&mut self, id: ChildRecordId) -> Result<ChildRecord, ChildListError> {
        self.children.remove(id)
    }

    /// Required fields for what is currently shown
    pub fn required_fields(&self) -> Vec<RequiredField> {
        let mut fields: Vec<RequiredField> = EmployeeField::ALL
            .iter()
            .map(|&field| RequiredField {
                key: FieldKey::Employee(field),
                value: self.employee.value(field).to_string(),
            })
            .collect();

        fields.push(RequiredField {
            key: FieldKey::MaritalStatus,
            value: self.marital_status.as_select_value().to_string(),
        });

        let visibility = self.visibility();
        if visibility.spouse_visible {
            fields.extend(SpouseField::REQUIRED.iter().map(|&field| RequiredField {
                key: FieldKey::Spouse(field),
                value: self.spouse.value(field).to_string(),
            }));
        }

        if visibility.children_visible {
            for record in self.children.records() {
                fields.extend(ChildField::REQUIRED.iter().map(|&field| RequiredField {
                    key: FieldKey::Child {
                        id: record.id,
                        field,
                    },
                    value: record.value(field).to_string(),
                }));
            }
        }

        fields
    }

    pub fn validate(&self) -> RequiredFieldsReport {
        validate_required_fields(&self.required_fields())
    }
}

/// Where a flash message is in its dismissal sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlashPhase {
    Visible,
    Faded,
    Removed,
}

/// Timing of the flash-message dismissal: shown for `display_ms`, then faded
/// to opacity 0, then removed `fade_ms` later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashTimeline {
    pub display_ms: u32,
    pub fade_ms: u32,
}

impl Default for FlashTimeline {
    fn default() -> Self {
        FormConfig::default().flash_timeline()
    }
}

impl FlashTimeline {
    pub fn removal_at_ms(&self) -> u32 {
        self.display_ms.saturating_add(self.fade_ms)
    }

    pub fn phase_at(&self, elapsed_ms: u32) -> FlashPhase {
        if elapsed_ms < self.display_ms {
            FlashPhase::Visible
        } else if elapsed_ms < self.removal_at_ms() {
            FlashPhase::Faded
        } else {
            FlashPhase::Removed
        }
    }

    /// Inline opacity the message should carry at `elapsed_ms`
    pub fn opacity_at(&self, elapsed_ms: u32) -> Option<&'static str> {
        match self.phase_at(elapsed_ms) {
            FlashPhase::Visible => None,
            FlashPhase::Faded | FlashPhase::Removed => Some("0"),
        }
    }
}

/// Human-readable age for a date of birth, e.g. "Newborn", "12 days",
/// "3 months", "7 years". Empty when the date can't be parsed or lies in the
/// future.
pub fn age_hint(date_of_birth: &str, today: NaiveDate) -> String {
    let Ok(dob) = NaiveDate::parse_from_str(date_of_birth.trim(), "%Y-%m-%d") else {
        return String::new();
    };
    if dob > today {
        return String::new();
    }

    // Whole months: the largest N with dob + N months (clamped to month end)
    // not after today. The remainder is counted in days.
    let add_months = |n: i32| dob.checked_add_months(Months::new(n as u32));
    let mut total_months =
        (today.year() - dob.year()) * 12 + today.month() as i32 - dob.month() as i32;
    while total_months > 0 && add_months(total_months).map_or(true, |d| d > today) {
        total_months -= 1;
    }
    let anchor = add_months(total_months).unwrap_or(dob);
    let days = (today - anchor).num_days();
    let years = total_months / 12;
    let months = total_months % 12;

    if years == 0 {
        if months == 0 {
            if days <= 1 {
                return "Newborn".to_string();
            }
            return format!("{} days", days);
        }
        if days > 15 {
            return format!("{} months", months + 1);
        }
        return format!("{} months", months);
    }
    if years == 1 && months == 0 && days == 0 {
        return "1 year".to_string();
    }
    format!("{} years", years)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn filled_form(status: MaritalStatus) -> FamilyForm {
        let mut form = FamilyForm::new(&FormConfig::default());
        form.employee = EmployeeDetails {
            employee_id: "E042".to_string(),
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            date_of_birth: "1988-04-12".to_string(),
        };
        form.set_marital_status(status);
        form
    }

    #[test]
    fn test_married_shows_both_sections() {
        let visibility = MaritalStatus::Married.visibility();
        assert!(visibility.spouse_visible);
        assert!(visibility.children_visible);
        assert_eq!(visibility.spouse_display(), "block");
        assert_eq!(visibility.children_display(), "block");
    }

    #[test]
    fn test_divorced_shows_children_only() {
        let visibility = MaritalStatus::Divorced.visibility();
        assert!(!visibility.spouse_visible);
        assert!(visibility.children_visible);
        assert_eq!(visibility.spouse_display(), "none");
    }

    #[test]
    fn test_other_statuses_hide_both_and_clear_children() {
        for raw in ["Single", "Widowed", "", "Separated"] {
            let mut form = filled_form(MaritalStatus::Married);
            form.add_child().unwrap();
            form.add_child().unwrap();
            form.spouse.full_name = "Ravi".to_string();

            let visibility = form.set_marital_status(MaritalStatus::from_select_value(raw));

            assert!(!visibility.spouse_visible, "status {:?}", raw);
            assert!(!visibility.children_visible, "status {:?}", raw);
            assert_eq!(form.children.len(), 0);
            assert!(form.spouse.is_blank());
        }
    }

    #[test]
    fn test_divorced_clears_spouse_but_keeps_children() {
        let mut form = filled_form(MaritalStatus::Married);
        form.spouse.full_name = "Ravi".to_string();
        form.spouse.gender = Some(Gender::Male);
        let id = form.add_child().unwrap();
        form.children.update(id, ChildField::FullName, "Mira").unwrap();

        form.set_marital_status(MaritalStatus::Divorced);

        assert!(form.spouse.is_blank());
        assert_eq!(form.children.len(), 1);
        assert_eq!(form.children.get(id).unwrap().full_name, "Mira");
    }

    #[test]
    fn test_unknown_status_round_trips_select_value() {
        let status = MaritalStatus::from_select_value("Separated");
        assert_eq!(status, MaritalStatus::Unspecified("Separated".to_string()));
        assert_eq!(status.as_select_value(), "Separated");
        assert_eq!(MaritalStatus::default().as_select_value(), "");
    }

    #[test]
    fn test_add_children_up_to_capacity() {
        let mut list = ChildRecordList::default();

        list.add().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.titles(), vec!["Child 1"]);

        list.add().unwrap();
        assert_eq!(list.titles(), vec!["Child 1", "Child 2"]);
        assert!(list.is_full());

        let err = list.add().unwrap_err();
        assert_eq!(err, ChildListError::CapacityReached { capacity: 2 });
        assert_eq!(err.to_string(), "You can add a maximum of 2 children.");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_first_renumbers_remaining() {
        let mut list = ChildRecordList::default();
        let first = list.add().unwrap();
        let second = list.add().unwrap();
        assert_eq!(list.display_index(second), Some(2));

        let removed = list.remove(first).unwrap();

        assert_eq!(removed.id, first);
        assert_eq!(list.len(), 1);
        assert_eq!(list.display_index(second), Some(1));
        assert_eq!(list.titles(), vec!["Child 1"]);
        assert_eq!(list.display_index(first), None);
    }

    #[test]
    fn test_remove_unknown_record_is_rejected() {
        let mut list = ChildRecordList::default();
        let id = list.add().unwrap();
        list.remove(id).unwrap();

        let err = list.remove(id).unwrap_err();
        assert_eq!(err, ChildListError::UnknownRecord(id));
        assert_eq!(list.len(), 0);

        // Room is freed after removal
        list.add().unwrap();
        list.add().unwrap();
        assert!(list.is_full());
    }

    #[test]
    fn test_update_child_fields() {
        let mut list = ChildRecordList::default();
        let id = list.add().unwrap();

        list.update(id, ChildField::Gender, "Female").unwrap();
        list.update(id, ChildField::DateOfBirth, "2019-02-01").unwrap();
        let record = list.get(id).unwrap();
        assert_eq!(record.gender, Some(Gender::Female));
        assert_eq!(record.value(ChildField::Gender), "Female");

        list.update(id, ChildField::Gender, "").unwrap();
        assert_eq!(list.get(id).unwrap().gender, None);

        let missing = ChildRecordId::new();
        assert_eq!(
            list.update(missing, ChildField::FullName, "x"),
            Err(ChildListError::UnknownRecord(missing))
        );
    }

    #[test]
    fn test_child_field_naming() {
        assert_eq!(ChildField::FullName.input_name(), "family_name[]");
        assert_eq!(ChildField::Gender.input_name(), "family_relationship[]");
        assert_eq!(ChildField::DateOfBirth.input_name(), "family_dob[]");
        assert_eq!(ChildField::PhoneNumber.input_name(), "family_phone[]");
        assert_eq!(ChildField::Gender.dom_id(2), "family_relationship_2");
    }

    #[test]
    fn test_validate_flags_exactly_the_empty_fields() {
        let id = ChildRecordId::new();
        let fields = vec![
            RequiredField {
                key: FieldKey::Employee(EmployeeField::FullName),
                value: "Asha".to_string(),
            },
            RequiredField {
                key: FieldKey::Employee(EmployeeField::Email),
                value: "   ".to_string(),
            },
            RequiredField {
                key: FieldKey::Child {
                    id,
                    field: ChildField::DateOfBirth,
                },
                value: String::new(),
            },
        ];

        let report = validate_required_fields(&fields);

        assert!(!report.is_valid());
        assert_eq!(
            report.invalid_fields(),
            vec![
                FieldKey::Employee(EmployeeField::Email),
                FieldKey::Child {
                    id,
                    field: ChildField::DateOfBirth
                },
            ]
        );
        assert_eq!(
            report.status_of(&FieldKey::Employee(EmployeeField::FullName)),
            Some(FieldStatus::Valid)
        );
    }

    #[test]
    fn test_complete_form_is_valid() {
        let mut form = filled_form(MaritalStatus::Married);
        for field in SpouseField::REQUIRED {
            let value = if field == SpouseField::Gender { "Male" } else { "x" };
            form.spouse.set_value(field, value);
        }
        let id = form.add_child().unwrap();
        form.children.update(id, ChildField::FullName, "Mira").unwrap();
        form.children.update(id, ChildField::Gender, "Female").unwrap();
        form.children.update(id, ChildField::DateOfBirth, "2019-02-01").unwrap();

        let report = form.validate();
        assert!(report.is_valid(), "{:?}", report.invalid_fields());
        // 5 employee + status + 3 spouse + 3 child; phone is optional
        assert_eq!(report.statuses.len(), 12);
    }

    #[test]
    fn test_required_fields_follow_visibility() {
        let mut form = filled_form(MaritalStatus::Single);
        assert!(form.validate().is_valid());

        form.set_marital_status(MaritalStatus::Divorced);
        let id = form.add_child().unwrap();
        let report = form.validate();
        assert_eq!(
            report.invalid_fields(),
            ChildField::REQUIRED
                .iter()
                .map(|&field| FieldKey::Child { id, field })
                .collect::<Vec<_>>()
        );
        assert!(report
            .statuses
            .iter()
            .all(|(key, _)| !matches!(key, FieldKey::Spouse(_))));
    }

    #[test]
    fn test_empty_marital_status_is_invalid() {
        let form = filled_form(MaritalStatus::default());
        assert_eq!(form.validate().invalid_fields(), vec![FieldKey::MaritalStatus]);
    }

    #[test]
    fn test_border_colors() {
        let config = FormConfig::default();
        assert_eq!(FieldStatus::Invalid.border_color(&config), "#e74c3c");
        assert_eq!(FieldStatus::Valid.border_color(&config), "#ddd");
    }

    #[test]
    fn test_flash_timeline() {
        let timeline = FlashTimeline::default();
        assert_eq!(timeline.phase_at(0), FlashPhase::Visible);
        assert_eq!(timeline.phase_at(4999), FlashPhase::Visible);
        assert_eq!(timeline.opacity_at(4999), None);
        assert_eq!(timeline.phase_at(5000), FlashPhase::Faded);
        assert_eq!(timeline.opacity_at(5000), Some("0"));
        assert_eq!(timeline.phase_at(5299), FlashPhase::Faded);
        assert_eq!(timeline.phase_at(5300), FlashPhase::Removed);
        assert_eq!(timeline.removal_at_ms(), 5300);
    }

    #[test]
    fn test_config_partial_override() {
        let config: FormConfig =
            serde_json::from_str(r#"{"flash_display_ms": 1000, "log_level": "debug"}"#).unwrap();
        assert_eq!(config.flash_display_ms, 1000);
        assert_eq!(config.flash_fade_ms, 300);
        assert_eq!(config.max_children, 2);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_age_hint() {
        let today = date("2025-06-15");
        assert_eq!(age_hint("2025-06-15", today), "Newborn");
        assert_eq!(age_hint("2025-06-14", today), "Newborn");
        assert_eq!(age_hint("2025-06-03", today), "12 days");
        assert_eq!(age_hint("2025-03-10", today), "3 months");
        // 2 months and 20 days rounds up
        assert_eq!(age_hint("2025-03-26", today), "3 months");
        assert_eq!(age_hint("2024-06-15", today), "1 year");
        assert_eq!(age_hint("2018-01-20", today), "7 years");
        // Leap-day birthdays reach a full year on 28 February
        assert_eq!(age_hint("2024-02-29", date("2025-02-28")), "1 year");
        assert_eq!(age_hint("2024-01-31", date("2024-03-30")), "2 months");
        assert_eq!(age_hint("not-a-date", today), "");
        assert_eq!(age_hint("2026-01-01", today), "");
    }
}
