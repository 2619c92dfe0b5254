use crate::helpers::{spawn_app, spawn_unconfigured_app};

#[tokio::test]
async fn the_landing_page_shows_an_idle_registration_form() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_home().await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(r#"<form id="registration-form" method="post""#));
    assert!(html_page.contains(r#"data-status="idle""#));
    for input in ["prenom", "nom", "email", "age", "telephone", "attentes"] {
        assert!(
            html_page.contains(&format!(r#"name="{input}" required"#)),
            "The {input} input is missing or optional."
        );
    }
    assert!(html_page.contains(r#"type="number" min="15""#));
    assert!(!html_page.contains("registration-inactive"));
}

#[tokio::test]
async fn the_landing_page_warns_when_registration_is_inactive() {
    // Arrange
    let app = spawn_unconfigured_app().await;

    // Act
    let html_page = app.get_home().await.text().await.unwrap();

    // Assert
    assert!(html_page.contains("registration-inactive"));
}
