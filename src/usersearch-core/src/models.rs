use serde::{Deserialize, Serialize};

/// SearchRequest is what a caller hands to the client for one lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Desired maximum number of users; negative is invalid
    pub limit: i64,
    /// Number of matching users to skip; negative is invalid
    pub offset: i64,
    /// Substring filter, empty disables filtering
    #[serde(default)]
    pub query: String,
    /// One of `Id`, `Age`, `Name`, or empty for the default (`Name`)
    #[serde(default)]
    pub order_field: String,
}

impl SearchRequest {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit,
            offset,
            ..Self::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_order_field(mut self, order_field: impl Into<String>) -> Self {
        self.order_field = order_field.into();
        self
    }
}

/// User as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: i64,
    pub name: String, // first and last name joined by one space
    pub age: i64,
    pub about: String,
    pub gender: String,
}

/// SearchResponse is the only successful outcome of a lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub users: Vec<User>,
    pub next_page: bool,
}

/// SearchErrorResponse is the body of a 400 reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchErrorResponse {
    #[serde(rename = "Error", default)]
    pub error: String,
}

impl SearchErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// OrderField lists the fields the server can sort on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderField {
    Id,
    Age,
    #[default]
    Name,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported order field: {0:?}")]
pub struct UnknownOrderField(pub String);

impl OrderField {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderField::Id => "Id",
            OrderField::Age => "Age",
            OrderField::Name => "Name",
        }
    }
}

impl std::str::FromStr for OrderField {
    type Err = UnknownOrderField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "Name" => Ok(OrderField::Name),
            "Id" => Ok(OrderField::Id),
            "Age" => Ok(OrderField::Age),
            other => Err(UnknownOrderField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_uses_wire_keys() {
        let user = User {
            id: 3,
            name: "Everett Dillard".to_string(),
            age: 27,
            about: "text".to_string(),
            gender: "male".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["Id"], 3);
        assert_eq!(json["Name"], "Everett Dillard");
        assert_eq!(json["Age"], 27);
        assert_eq!(json["About"], "text");
        assert_eq!(json["Gender"], "male");
    }

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_string(&SearchErrorResponse::new("ErrorBadOrderField")).unwrap();
        assert_eq!(body, r#"{"Error":"ErrorBadOrderField"}"#);

        // The reference server pads its bodies with a space after the colon
        let parsed: SearchErrorResponse =
            serde_json::from_str(r#"{"Error": "ErrorBadOrderField"}"#).unwrap();
        assert_eq!(parsed.error, "ErrorBadOrderField");

        // A body without the field still decodes, with an empty code
        let parsed: SearchErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.error, "");
    }

    #[test]
    fn test_order_field_parse() {
        assert_eq!("".parse::<OrderField>(), Ok(OrderField::Name));
        assert_eq!("Name".parse::<OrderField>(), Ok(OrderField::Name));
        assert_eq!("Id".parse::<OrderField>(), Ok(OrderField::Id));
        assert_eq!("Age".parse::<OrderField>(), Ok(OrderField::Age));
        assert!("Age1".parse::<OrderField>().is_err());
        assert!("age".parse::<OrderField>().is_err());
    }
}
