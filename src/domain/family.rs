//! Family member records
//!
//! Family members are the relatives attached to a logged-in user. The
//! backend returns raw `relatives` rows; the client maps them into
//! [`FamilyMember`] and derives the display health id on demand.

use super::ids::UserId;
use super::lenient;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Format a backend id as a display health id (`HEALTH` + 3-digit zero pad)
///
/// Purely cosmetic: the value is never stored, so it cannot drift from the
/// backend-assigned id. Ids of zero or less render as `HEALTH000`.
///
/// # Examples
///
/// ```
/// use chhanv::domain::family::health_id;
///
/// assert_eq!(health_id(7), "HEALTH007");
/// assert_eq!(health_id(42), "HEALTH042");
/// assert_eq!(health_id(1234), "HEALTH1234");
/// assert_eq!(health_id(-5), "HEALTH000");
/// ```
pub fn health_id(id: i64) -> String {
    format!("HEALTH{:03}", id.max(0))
}

/// Raw `get_family_members.php` row
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberRaw {
    #[serde(rename = "r_id", default, deserialize_with = "lenient::int")]
    pub r_id: i64,

    #[serde(default, deserialize_with = "lenient::string")]
    pub full_name: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub relation: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub date_of_birth: String,

    #[serde(default, deserialize_with = "lenient::int")]
    pub age: i64,

    #[serde(default, deserialize_with = "lenient::string")]
    pub blood_group: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub gender: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub phone_number: String,
}

/// A relative of the logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: i64,
    pub name: String,
    pub relation: String,
    pub date_of_birth: String,
    pub age: i64,
    pub blood_group: String,
    pub gender: String,
    pub phone_number: String,
    /// Not stored in the relatives table; always `None` from the backend
    pub aadhar_number: Option<String>,
}

impl FamilyMember {
    /// Display health id derived from the backend id
    pub fn health_id(&self) -> String {
        health_id(self.id)
    }
}

impl From<FamilyMemberRaw> for FamilyMember {
    fn from(raw: FamilyMemberRaw) -> Self {
        Self {
            id: raw.r_id,
            name: raw.full_name,
            relation: raw.relation,
            date_of_birth: raw.date_of_birth,
            age: raw.age,
            blood_group: raw.blood_group,
            gender: raw.gender,
            phone_number: raw.phone_number,
            aadhar_number: None,
        }
    }
}

/// Form input for adding a family member
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewFamilyMember {
    pub name: String,
    pub relation: String,
    /// Optional; derived from `age` when blank
    pub date_of_birth: String,
    pub age: String,
    pub blood_group: String,
    pub gender: String,
    pub phone_number: String,
}

impl NewFamilyMember {
    /// Names of required fields that are blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let required = [
            ("name", &self.name),
            ("relation", &self.relation),
            ("age", &self.age),
            ("gender", &self.gender),
            ("phone_number", &self.phone_number),
        ];

        required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// Build the `add_family.php` body for `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error when the user id is not numeric or the date of
    /// birth is blank and the age is not a usable number.
    pub fn to_request(
        &self,
        user_id: &UserId,
        today: NaiveDate,
    ) -> Result<AddFamilyRequest, String> {
        let numeric_id = user_id
            .as_numeric()
            .ok_or_else(|| format!("User ID '{user_id}' is not numeric"))?;

        let date_of_birth = derive_date_of_birth(&self.date_of_birth, &self.age, today)?;

        let blood_group = Some(self.blood_group.trim().to_string()).filter(|s| !s.is_empty());

        Ok(AddFamilyRequest {
            user_id: numeric_id,
            full_name: self.name.trim().to_string(),
            relation: self.relation.trim().to_string(),
            date_of_birth,
            blood_group,
            gender: self.gender.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
        })
    }
}

/// Oldest age accepted when deriving a date of birth
pub const MAX_AGE: i32 = 150;

/// Use the given date of birth, or January 1st of `today.year - age`
///
/// The age must be a whole number in `0..=MAX_AGE`.
///
/// # Examples
///
/// ```
/// use chhanv::domain::family::derive_date_of_birth;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// assert_eq!(derive_date_of_birth("", "30", today).unwrap(), "1995-01-01");
/// assert_eq!(derive_date_of_birth("1990-05-05", "30", today).unwrap(), "1990-05-05");
/// ```
pub fn derive_date_of_birth(
    date_of_birth: &str,
    age: &str,
    today: NaiveDate,
) -> Result<String, String> {
    let date_of_birth = date_of_birth.trim();
    if !date_of_birth.is_empty() {
        return Ok(date_of_birth.to_string());
    }

    let age = age.trim();
    let years: i32 = age
        .parse()
        .map_err(|_| format!("Age '{age}' is not a number"))?;

    if !(0..=MAX_AGE).contains(&years) {
        return Err(format!("Age '{age}' must be between 0 and {MAX_AGE}"));
    }

    let year = today
        .year()
        .checked_sub(years)
        .ok_or_else(|| format!("Age '{age}' is out of range"))?;

    Ok(format!("{year}-01-01"))
}

/// Body of `POST add_family.php`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFamilyRequest {
    pub user_id: i64,
    pub full_name: String,
    pub relation: String,
    pub date_of_birth: String,
    /// Serialized as `null` when blank
    pub blood_group: Option<String>,
    pub gender: String,
    pub phone_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
    }

    fn complete_form() -> NewFamilyMember {
        NewFamilyMember {
            name: "Sita Devi".to_string(),
            relation: "पत्नी".to_string(),
            date_of_birth: String::new(),
            age: "34".to_string(),
            blood_group: String::new(),
            gender: "female".to_string(),
            phone_number: "9876500000".to_string(),
        }
    }

    #[test]
    fn test_health_id_padding() {
        assert_eq!(health_id(0), "HEALTH000");
        assert_eq!(health_id(5), "HEALTH005");
        assert_eq!(health_id(999), "HEALTH999");
        assert_eq!(health_id(1000), "HEALTH1000");
    }

    #[test]
    fn test_raw_mapping() {
        let raw: FamilyMemberRaw = serde_json::from_value(json!({
            "r_id": "17",
            "fullName": "Ramesh",
            "relation": "पुत्र",
            "dateOfBirth": "2010-01-01",
            "age": 15,
            "bloodGroup": null,
            "gender": "male",
            "phoneNumber": "9876512345"
        }))
        .unwrap();

        let member = FamilyMember::from(raw);
        assert_eq!(member.id, 17);
        assert_eq!(member.name, "Ramesh");
        assert_eq!(member.blood_group, "");
        assert_eq!(member.health_id(), "HEALTH017");
        assert!(member.aadhar_number.is_none());
    }

    #[test]
    fn test_missing_fields() {
        assert!(complete_form().missing_fields().is_empty());

        let form = NewFamilyMember {
            name: "  ".to_string(),
            ..complete_form()
        };
        assert_eq!(form.missing_fields(), vec!["name"]);

        assert_eq!(NewFamilyMember::default().missing_fields().len(), 5);
    }

    #[test]
    fn test_to_request_derives_date_and_nulls_blood_group() {
        let user_id = UserId::new("42").unwrap();
        let request = complete_form().to_request(&user_id, today()).unwrap();

        assert_eq!(request.user_id, 42);
        assert_eq!(request.date_of_birth, "1991-01-01");
        assert_eq!(request.blood_group, None);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["userId"], json!(42));
        assert_eq!(body["fullName"], json!("Sita Devi"));
        assert_eq!(body["bloodGroup"], json!(null));
    }

    #[test]
    fn test_to_request_rejects_non_numeric_user() {
        let user_id = UserId::new("abc").unwrap();
        assert!(complete_form().to_request(&user_id, today()).is_err());
    }

    #[test_case("thirty" ; "not a number")]
    #[test_case("-1" ; "negative")]
    #[test_case("151" ; "too old")]
    #[test_case("-2147483648" ; "i32 min")]
    #[test_case("2147483647" ; "i32 max")]
    #[test_case("99999999999" ; "beyond i32")]
    fn test_derive_date_of_birth_bad_age(age: &str) {
        assert!(derive_date_of_birth("", age, today()).is_err());
    }

    #[test_case("0", "2025-01-01" ; "newborn")]
    #[test_case(" 8 ", "2017-01-01" ; "padded")]
    #[test_case("150", "1875-01-01" ; "oldest")]
    fn test_derive_date_of_birth_from_age(age: &str, expected: &str) {
        assert_eq!(derive_date_of_birth("", age, today()).unwrap(), expected);
    }

    #[test_case(7, "HEALTH007" ; "small")]
    #[test_case(0, "HEALTH000" ; "zero")]
    #[test_case(-5, "HEALTH000" ; "negative")]
    fn test_health_id(id: i64, expected: &str) {
        assert_eq!(health_id(id), expected);
    }
}
