use super::*;

// =============================================================
// Role serialization
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::Agent).unwrap(), "\"agent\"");
}

#[test]
fn role_deserializes_lowercase() {
    let role: Role = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(role, Role::Admin);
}

// =============================================================
// AuthTokens wire shape
// =============================================================

#[test]
fn auth_tokens_round_trip() {
    let json = r#"{"token":"abc","user":{"id":"1","email":"a@b.com","name":"A","role":"agent"}}"#;
    let tokens: AuthTokens = serde_json::from_str(json).unwrap();
    assert_eq!(tokens.token, "abc");
    assert_eq!(tokens.user.role, Role::Agent);
}

// =============================================================
// Property wire shape
// =============================================================

#[test]
fn property_deserializes_camel_case() {
    let json = r#"{
        "id": "p1",
        "title": "Villa frente al mar",
        "description": "Tres recamaras con vista a la bahia.",
        "type": "sale",
        "status": "available",
        "price": 4500000,
        "location": {
            "address": "Av. Costera 12",
            "city": "Puerto Vallarta",
            "state": "Jalisco",
            "country": "Mexico",
            "postalCode": "48300",
            "coordinates": {"lat": 20.6, "lng": -105.2}
        },
        "features": {"bedrooms": 3, "bathrooms": 2, "area": 220.5, "parkingSpots": 2},
        "images": ["https://img.example/p1.jpg"],
        "amenities": ["Alberca"],
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z",
        "ownerId": "u7"
    }"#;
    let property: Property = serde_json::from_str(json).unwrap();
    assert_eq!(property.kind, PropertyType::Sale);
    assert_eq!(property.location.postal_code, "48300");
    assert_eq!(property.features.parking_spots, Some(2));
    assert_eq!(property.features.year_built, None);
    assert!(property.owner.is_none());
}

#[test]
fn property_form_serializes_type_field() {
    let form = PropertyForm {
        title: "Casa".to_owned(),
        kind: PropertyType::Rent,
        ..PropertyForm::default()
    };
    let json = serde_json::to_string(&form).unwrap();
    assert!(json.contains("\"type\":\"rent\""));
    assert!(json.contains("\"postalCode\""));
}

// =============================================================
// PropertyFilter query pairs
// =============================================================

#[test]
fn filter_empty_produces_no_pairs() {
    assert!(PropertyFilter::default().to_query_pairs().is_empty());
    assert!(PropertyFilter::default().is_empty());
}

#[test]
fn filter_set_fields_only() {
    let filter = PropertyFilter {
        search: Some("playa".to_owned()),
        kind: Some(PropertyType::Rent),
        min_price: Some(10_000.0),
        bedrooms: Some(2),
        ..PropertyFilter::default()
    };
    let pairs = filter.to_query_pairs();
    assert_eq!(
        pairs,
        vec![
            ("search", "playa".to_owned()),
            ("type", "rent".to_owned()),
            ("minPrice", "10000".to_owned()),
            ("bedrooms", "2".to_owned()),
        ]
    );
}

#[test]
fn filter_fractional_price_keeps_decimals() {
    let filter = PropertyFilter {
        max_price: Some(1500.5),
        ..PropertyFilter::default()
    };
    assert_eq!(filter.to_query_pairs(), vec![("maxPrice", "1500.5".to_owned())]);
}

// =============================================================
// Envelope and directory payloads
// =============================================================

#[test]
fn envelope_unwraps_users_page() {
    let json = r#"{
        "success": true,
        "data": {
            "users": [{
                "id": "u1",
                "email": "admin@costasuite.com",
                "name": "Admin",
                "role": "admin",
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z",
                "_count": {"properties": 4}
            }],
            "pagination": {"page": 1, "limit": 10, "total": 1, "pages": 1}
        }
    }"#;
    let envelope: ApiEnvelope<UsersPage> = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.data.users.len(), 1);
    assert_eq!(envelope.data.users[0].count.as_ref().unwrap().properties, 4);
    assert_eq!(envelope.data.pagination.pages, 1);
}

#[test]
fn update_user_input_skips_unset_fields() {
    let input = UpdateUserInput {
        name: Some("Nuevo".to_owned()),
        ..UpdateUserInput::default()
    };
    assert_eq!(serde_json::to_string(&input).unwrap(), r#"{"name":"Nuevo"}"#);
}
