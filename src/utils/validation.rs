//! Field-level validation of untyped request bodies.
//!
//! Every validator inspects the whole payload and reports all problems at once,
//! keyed by the JSON path of the offending field (`items[1].quantity`,
//! `deliveryDetails.phone`, ...). Validators never fail; callers decide what to
//! do with an invalid [`ValidationResult`].

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use serde::Serialize;
use serde_json::{Number, Value};

use crate::modules::{menu::repository::Category, order::repository::OrderStatus, user::repository::Role};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("Invalid email regex")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s()+-]{10,20}$").expect("Invalid phone number regex"));

static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("Invalid price regex"));

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("Invalid url regex"));

pub const PERSON_NAME_LENGTH: (usize, usize) = (2, 50);
pub const MENU_ITEM_NAME_LENGTH: (usize, usize) = (2, 100);
pub const ADDRESS_LENGTH: (usize, usize) = (10, 200);
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
pub const MAX_URL_LENGTH: usize = 2048;
pub const MAX_ITEM_QUANTITY: u64 = 1000;
/// Largest value a `NUMERIC(10, 2)` price column holds.
pub const MAX_PRICE: f64 = 99_999_999.99;

const MENU_ITEM_FIELDS: [&str; 6] = [
    "name",
    "description",
    "price",
    "imageUrl",
    "category",
    "available",
];

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn into_result(self) -> Result<(), Vec<FieldError>> {
        match self.valid {
            true => Ok(()),
            false => Err(self.errors),
        }
    }

    #[cfg(test)]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }
}

#[derive(Default)]
struct Errors(Vec<FieldError>);

impl Errors {
    fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    fn finish(self) -> ValidationResult {
        ValidationResult {
            valid: self.0.is_empty(),
            errors: self.0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Create,
    Update,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Decides on the decimal representation of the number, so `12.99` passes and
/// `12.999` does not regardless of how close the float is to a cent. `-0.0`
/// counts as zero.
pub fn has_at_most_two_decimals(price: &Number) -> bool {
    price.as_f64() == Some(0.0) || PRICE_PATTERN.is_match(&price.to_string())
}

pub fn invalid_status_message() -> String {
    format!(
        "Status must be one of: {}",
        OrderStatus::ALL.iter().join(", ")
    )
}

pub fn invalid_category_message() -> String {
    format!("Category must be one of: {}", Category::ALL.iter().join(", "))
}

fn field<'a>(input: &'a Value, key: &str) -> Option<&'a Value> {
    input.get(key).filter(|value| !value.is_null())
}

fn required_str<'a>(
    errors: &mut Errors,
    at: &str,
    value: Option<&'a Value>,
    label: &str,
) -> Option<&'a str> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
        Some(Value::String(_)) | None => {
            errors.add(at, format!("{label} is required"));
            None
        }
        Some(_) => {
            errors.add(at, format!("{label} must be a string"));
            None
        }
    }
}

fn check_length(errors: &mut Errors, at: &str, value: &str, label: &str, (min, max): (usize, usize)) {
    let length = value.trim().chars().count();
    if length < min || length > max {
        errors.add(
            at,
            format!("{label} must be between {min} and {max} characters"),
        );
    }
}

fn check_email(errors: &mut Errors, input: &Value) {
    if let Some(email) = required_str(errors, "email", field(input, "email"), "Email") {
        let email = email.trim();
        if email.chars().count() > MAX_EMAIL_LENGTH {
            errors.add(
                "email",
                format!("Email cannot exceed {MAX_EMAIL_LENGTH} characters"),
            );
        } else if !is_valid_email(email) {
            errors.add("email", "Please provide a valid email address");
        }
    }
}

fn check_price(errors: &mut Errors, at: &str, value: Option<&Value>) {
    match value {
        None => errors.add(at, "Price is required"),
        Some(Value::Number(price)) => {
            if price.as_f64().is_some_and(|price| price < 0.0) {
                errors.add(at, "Price cannot be negative");
            } else if price.as_f64().map_or(true, |price| price > MAX_PRICE) {
                errors.add(at, "Price cannot exceed 99999999.99");
            } else if !has_at_most_two_decimals(price) {
                errors.add(at, "Price must have at most 2 decimal places");
            }
        }
        Some(_) => errors.add(at, "Price must be a number"),
    }
}

pub fn validate_registration_input(input: &Value, admin_secret: Option<&str>) -> ValidationResult {
    let mut errors = Errors::default();

    if let Some(name) = required_str(&mut errors, "name", field(input, "name"), "Name") {
        check_length(&mut errors, "name", name, "Name", PERSON_NAME_LENGTH);
    }

    check_email(&mut errors, input);

    if let Some(password) =
        required_str(&mut errors, "password", field(input, "password"), "Password")
    {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.add(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters long"),
            );
        }
    }

    let role = match field(input, "role") {
        None => Some(Role::User),
        Some(Value::String(raw)) => raw.parse::<Role>().ok(),
        Some(_) => None,
    };

    match role {
        None => errors.add("role", "Role must be either user or admin"),
        Some(Role::Admin) => match field(input, "adminCode") {
            Some(Value::String(code)) if !code.is_empty() => {
                if admin_secret != Some(code.as_str()) {
                    errors.add("adminCode", "Invalid admin code");
                }
            }
            Some(Value::String(_)) | None => {
                errors.add("adminCode", "Admin code is required for admin registration")
            }
            Some(_) => errors.add("adminCode", "Invalid admin code"),
        },
        Some(Role::User) => (),
    }

    errors.finish()
}

pub fn validate_login_input(input: &Value) -> ValidationResult {
    let mut errors = Errors::default();

    check_email(&mut errors, input);
    required_str(&mut errors, "password", field(input, "password"), "Password");

    errors.finish()
}

pub fn validate_menu_item_input(input: &Value) -> ValidationResult {
    validate_menu_item(input, Mode::Create)
}

/// Same rules as [`validate_menu_item_input`], applied only to the fields that
/// are present.
pub fn validate_menu_item_update(input: &Value) -> ValidationResult {
    validate_menu_item(input, Mode::Update)
}

fn validate_menu_item(input: &Value, mode: Mode) -> ValidationResult {
    let mut errors = Errors::default();
    let wanted = |key: &str| mode == Mode::Create || field(input, key).is_some();

    if mode == Mode::Update && !MENU_ITEM_FIELDS.iter().any(|key| field(input, key).is_some()) {
        errors.add("body", "At least one field must be provided");
        return errors.finish();
    }

    if wanted("name") {
        if let Some(name) = required_str(&mut errors, "name", field(input, "name"), "Name") {
            check_length(&mut errors, "name", name, "Name", MENU_ITEM_NAME_LENGTH);
        }
    }

    if wanted("description") {
        if let Some(description) = required_str(
            &mut errors,
            "description",
            field(input, "description"),
            "Description",
        ) {
            if description.trim().chars().count() > MAX_DESCRIPTION_LENGTH {
                errors.add(
                    "description",
                    format!("Description cannot exceed {MAX_DESCRIPTION_LENGTH} characters"),
                );
            }
        }
    }

    if wanted("price") {
        check_price(&mut errors, "price", field(input, "price"));
    }

    if wanted("category") {
        match field(input, "category") {
            Some(Value::String(raw)) if raw.parse::<Category>().is_ok() => (),
            None => errors.add("category", "Category is required"),
            Some(_) => errors.add("category", invalid_category_message()),
        }
    }

    match field(input, "imageUrl") {
        None => (),
        Some(Value::String(url))
            if url.len() <= MAX_URL_LENGTH && URL_PATTERN.is_match(url.trim()) => {}
        Some(_) => errors.add("imageUrl", "Image URL must be a valid http(s) URL"),
    }

    match field(input, "available") {
        None | Some(Value::Bool(_)) => (),
        Some(_) => errors.add("available", "Available must be a boolean"),
    }

    errors.finish()
}

pub fn validate_order_input(input: &Value) -> ValidationResult {
    let mut errors = Errors::default();

    match field(input, "items") {
        Some(Value::Array(items)) if !items.is_empty() => {
            for (index, item) in items.iter().enumerate() {
                validate_order_item(&mut errors, index, item);
            }
        }
        Some(Value::Array(_)) | None => {
            errors.add("items", "Order must contain at least one item")
        }
        Some(_) => errors.add("items", "Items must be an array"),
    }

    match field(input, "deliveryDetails") {
        Some(details @ Value::Object(_)) => validate_delivery_details(&mut errors, details),
        None => errors.add("deliveryDetails", "Delivery details are required"),
        Some(_) => errors.add("deliveryDetails", "Delivery details must be an object"),
    }

    errors.finish()
}

fn validate_order_item(errors: &mut Errors, index: usize, item: &Value) {
    let at = |key: &str| format!("items[{index}].{key}");

    if !item.is_object() {
        errors.add(format!("items[{index}]"), "Item must be an object");
        return;
    }

    required_str(
        errors,
        &at("menuItemId"),
        field(item, "menuItemId"),
        "Menu item ID",
    );
    required_str(errors, &at("name"), field(item, "name"), "Item name");

    match field(item, "price") {
        Some(Value::Number(price)) if price.as_f64().is_some_and(|price| price >= 0.0) => (),
        None => errors.add(at("price"), "Item price is required"),
        Some(_) => errors.add(at("price"), "Item price must be a non-negative number"),
    }

    match field(item, "quantity").map(Value::as_u64) {
        Some(Some(quantity)) if (1..=MAX_ITEM_QUANTITY).contains(&quantity) => (),
        Some(Some(quantity)) if quantity > MAX_ITEM_QUANTITY => errors.add(
            at("quantity"),
            format!("Quantity cannot exceed {MAX_ITEM_QUANTITY}"),
        ),
        None => errors.add(at("quantity"), "Item quantity is required"),
        Some(_) => errors.add(at("quantity"), "Quantity must be a positive integer"),
    }
}

fn validate_delivery_details(errors: &mut Errors, details: &Value) {
    if let Some(name) = required_str(
        errors,
        "deliveryDetails.name",
        field(details, "name"),
        "Delivery name",
    ) {
        check_length(
            errors,
            "deliveryDetails.name",
            name,
            "Delivery name",
            PERSON_NAME_LENGTH,
        );
    }

    if let Some(address) = required_str(
        errors,
        "deliveryDetails.address",
        field(details, "address"),
        "Delivery address",
    ) {
        check_length(
            errors,
            "deliveryDetails.address",
            address,
            "Delivery address",
            ADDRESS_LENGTH,
        );
    }

    if let Some(phone) = required_str(
        errors,
        "deliveryDetails.phone",
        field(details, "phone"),
        "Phone number",
    ) {
        if !is_valid_phone(phone.trim()) {
            errors.add("deliveryDetails.phone", "Please provide a valid phone number");
        }
    }
}

pub fn validate_status_update(input: &Value) -> ValidationResult {
    let mut errors = Errors::default();

    match field(input, "status") {
        Some(Value::String(raw)) if raw.parse::<OrderStatus>().is_ok() => (),
        _ => errors.add("status", invalid_status_message()),
    }

    errors.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn menu_item() -> Value {
        json!({
            "name": "Jollof Rice",
            "description": "Smoky party rice with plantain",
            "price": 12.99,
            "imageUrl": "https://cdn.example.com/jollof.png",
            "category": "Main Course",
            "available": true
        })
    }

    fn order() -> Value {
        json!({
            "items": [
                { "menuItemId": "01J0MENU0000000000000000A1", "name": "Jollof Rice", "price": 10, "quantity": 2 },
                { "menuItemId": "01J0MENU0000000000000000B2", "name": "Chapman", "price": 5, "quantity": 3 }
            ],
            "deliveryDetails": {
                "name": "Ada Obi",
                "address": "12 Marina Road, Lagos Island",
                "phone": "+234 (803) 555-0101"
            }
        })
    }

    #[test]
    fn accepts_valid_menu_item() {
        let result = validate_menu_item_input(&menu_item());
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn accepts_menu_item_without_optional_fields() {
        let mut item = menu_item();
        item.as_object_mut().unwrap().remove("imageUrl");
        item.as_object_mut().unwrap().remove("available");
        assert!(validate_menu_item_input(&item).valid);
    }

    #[test]
    fn price_decimal_places_follow_string_form() {
        let mut item = menu_item();
        item["price"] = json!(12.999);
        let result = validate_menu_item_input(&item);
        assert!(!result.valid);
        assert_eq!(
            result.message_for("price"),
            Some("Price must have at most 2 decimal places")
        );

        for accepted in [json!(12.99), json!(12.5), json!(12), json!(0)] {
            item["price"] = accepted;
            assert!(validate_menu_item_input(&item).valid, "{}", item["price"]);
        }
    }

    #[test]
    fn rejects_negative_and_non_numeric_prices() {
        let mut item = menu_item();
        item["price"] = json!(-1);
        assert_eq!(
            validate_menu_item_input(&item).message_for("price"),
            Some("Price cannot be negative")
        );

        item["price"] = json!("12.99");
        assert_eq!(
            validate_menu_item_input(&item).message_for("price"),
            Some("Price must be a number")
        );
    }

    #[test]
    fn price_fits_the_price_column() {
        let mut item = menu_item();
        for rejected in [json!(100000000), json!(1e16), json!(99999999.999)] {
            item["price"] = rejected;
            assert_eq!(
                validate_menu_item_input(&item).message_for("price"),
                Some("Price cannot exceed 99999999.99"),
                "{}",
                item["price"]
            );
        }

        item["price"] = json!(99999999.99);
        assert!(validate_menu_item_input(&item).valid);
    }

    #[test]
    fn negative_zero_price_is_zero() {
        let mut item = menu_item();
        item["price"] = json!(-0.0);
        assert!(validate_menu_item_input(&item).valid);
        assert!(validate_menu_item_update(&json!({ "price": -0.0 })).valid);
    }

    #[test]
    fn reports_every_menu_item_problem_at_once() {
        let result = validate_menu_item_input(&json!({
            "name": " a ",
            "price": 3.14159,
            "category": "Breakfast",
            "imageUrl": "ftp://files",
            "available": "yes"
        }));

        let fields: Vec<_> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            ["name", "description", "price", "category", "imageUrl", "available"]
        );
        assert!(result.message_for("category").unwrap().contains("Main Course"));
    }

    #[test]
    fn menu_item_update_checks_only_present_fields() {
        assert!(validate_menu_item_update(&json!({ "available": false })).valid);

        let result = validate_menu_item_update(&json!({ "price": 1.005 }));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "price");

        let result = validate_menu_item_update(&json!({}));
        assert_eq!(
            result.message_for("body"),
            Some("At least one field must be provided")
        );
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("ada.obi@mail.example.co"));
        assert!(!is_valid_email("ada+food@example.com"));
        assert!(!is_valid_email("ada@localhost"));
        assert!(!is_valid_email("ada example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn phone_pattern() {
        assert!(is_valid_phone("08035550101"));
        assert!(is_valid_phone("+1 (555) 010-1234"));
        assert!(!is_valid_phone("555-0101"));
        assert!(!is_valid_phone("0803555010x"));
        assert!(!is_valid_phone("+1 (555) 010-1234 5678 90"));
    }

    #[test]
    fn email_fits_the_email_column() {
        let long_email = format!("{}@example.com", "a".repeat(300));
        let registration = json!({ "name": "Ada Obi", "email": &long_email, "password": "secret1" });

        let result = validate_registration_input(&registration, None);
        assert!(!result.valid);
        assert_eq!(
            result.message_for("email"),
            Some("Email cannot exceed 254 characters")
        );
        assert_eq!(
            validate_login_input(&json!({ "email": long_email, "password": "x" })).message_for("email"),
            Some("Email cannot exceed 254 characters")
        );

        let longest = format!("{}@example.com", "a".repeat(MAX_EMAIL_LENGTH - 12));
        assert!(validate_login_input(&json!({ "email": longest, "password": "x" })).valid);
    }

    #[test]
    fn accepts_valid_registration() {
        let result = validate_registration_input(
            &json!({ "name": "Ada Obi", "email": "ada@example.com", "password": "secret1" }),
            None,
        );
        assert!(result.valid, "{:?}", result.errors);
    }

    #[test]
    fn registration_reports_all_fields() {
        let result = validate_registration_input(
            &json!({ "name": "A", "email": "not-an-email", "password": "123", "role": "chef" }),
            None,
        );
        let fields: Vec<_> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["name", "email", "password", "role"]);
    }

    #[test]
    fn admin_registration_distinguishes_missing_and_wrong_code() {
        let base = json!({
            "name": "Root Admin",
            "email": "admin@example.com",
            "password": "secret1",
            "role": "admin"
        });

        let missing = validate_registration_input(&base, Some("kitchen-key"));
        assert_eq!(
            missing.message_for("adminCode"),
            Some("Admin code is required for admin registration")
        );

        let mut wrong = base.clone();
        wrong["adminCode"] = json!("guess");
        assert_eq!(
            validate_registration_input(&wrong, Some("kitchen-key")).message_for("adminCode"),
            Some("Invalid admin code")
        );

        let mut right = base.clone();
        right["adminCode"] = json!("kitchen-key");
        assert!(validate_registration_input(&right, Some("kitchen-key")).valid);
        assert!(!validate_registration_input(&right, None).valid);
    }

    #[test]
    fn login_requires_email_and_password() {
        let result = validate_login_input(&json!({}));
        assert_eq!(result.message_for("email"), Some("Email is required"));
        assert_eq!(result.message_for("password"), Some("Password is required"));

        assert!(validate_login_input(&json!({ "email": "ada@example.com", "password": "x" })).valid);
    }

    #[test]
    fn accepts_valid_order() {
        let result = validate_order_input(&order());
        assert!(result.valid, "{:?}", result.errors);
    }

    #[test]
    fn indexes_item_errors() {
        let mut input = order();
        input["items"][0]["quantity"] = json!(0);
        input["items"][1]["price"] = json!(-5);
        input["items"][1]["menuItemId"] = json!("");
        input["items"]
            .as_array_mut()
            .unwrap()
            .push(json!({ "menuItemId": "x", "name": "Puff puff", "price": 1, "quantity": 1.5 }));

        let result = validate_order_input(&input);
        let fields: Vec<_> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "items[0].quantity",
                "items[1].menuItemId",
                "items[1].price",
                "items[2].quantity"
            ]
        );
    }

    #[test]
    fn caps_item_quantity() {
        let mut input = order();
        input["items"][0]["quantity"] = json!(MAX_ITEM_QUANTITY);
        assert!(validate_order_input(&input).valid);

        for rejected in [json!(1001), json!(2147483648u64)] {
            input["items"][0]["quantity"] = rejected;
            assert_eq!(
                validate_order_input(&input).message_for("items[0].quantity"),
                Some("Quantity cannot exceed 1000")
            );
        }
    }

    #[test]
    fn rejects_empty_items_and_missing_delivery() {
        let result = validate_order_input(&json!({ "items": [] }));
        assert_eq!(
            result.message_for("items"),
            Some("Order must contain at least one item")
        );
        assert_eq!(
            result.message_for("deliveryDetails"),
            Some("Delivery details are required")
        );
    }

    #[test]
    fn checks_delivery_details() {
        let mut input = order();
        input["deliveryDetails"] = json!({ "name": "A", "address": "short", "phone": "abc" });

        let result = validate_order_input(&input);
        assert_eq!(result.errors.len(), 3);
        assert!(result.message_for("deliveryDetails.name").is_some());
        assert!(result.message_for("deliveryDetails.address").is_some());
        assert_eq!(
            result.message_for("deliveryDetails.phone"),
            Some("Please provide a valid phone number")
        );
    }

    #[test]
    fn status_must_be_canonical() {
        for status in [
            "Order Received",
            "Preparing",
            "Out for Delivery",
            "Delivered",
            "Cancelled",
        ] {
            assert!(validate_status_update(&json!({ "status": status })).valid);
        }

        for input in [
            json!({ "status": "Shipped" }),
            json!({ "status": "delivered" }),
            json!({ "status": 3 }),
            json!({}),
        ] {
            let result = validate_status_update(&input);
            assert!(!result.valid);
            assert_eq!(
                result.message_for("status"),
                Some(
                    "Status must be one of: Order Received, Preparing, Out for Delivery, Delivered, Cancelled"
                )
            );
        }
    }
}
