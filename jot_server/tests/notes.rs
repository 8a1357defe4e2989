use jot::{ErrorResponse, NewNoteRequest, Note, UpdateNoteRequest};
use reqwest::StatusCode;
use wiremock::MockServer;

mod utils;

#[tokio::test]
async fn notes_routes() -> Result<(), Box<dyn std::error::Error>> {
    let model_server = MockServer::start().await;
    let state = utils::memory_state(&model_server.uri()).await?;
    let base_url = utils::spawn_server(state).await?;
    let client = reqwest::Client::new();
    let notes_url = format!("{base_url}/api/notes");

    // Make a note and check it's stored as given.
    let body = NewNoteRequest::builder()
        .title("T".to_string())
        .content("C".to_string())
        .build();
    let response = client
        .post(&notes_url)
        .bearer_auth(utils::USER_TOKEN)
        .json(&body)
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    let note1 = response.json::<Note>().await?;
    assert_eq!(note1.title, "T");
    assert_eq!(note1.content, "C");
    assert_eq!(note1.summary, None);
    assert_eq!(note1.user_id, utils::USER_TOKEN);
    assert_eq!(note1.created_at, note1.updated_at);

    // Fetch it back.
    let note_url = format!("{notes_url}/{}", note1.id);
    let response = client
        .get(&note_url)
        .bearer_auth(utils::USER_TOKEN)
        .send()
        .await?;
    let response = utils::assert_ok_response(response).await?;
    let note2 = response.json::<Note>().await?;
    assert_eq!(note2, note1);

    // Update only the content.
    let changes = UpdateNoteRequest::builder()
        .content("C2".to_string())
        .build();
    let response = client
        .put(&note_url)
        .bearer_auth(utils::USER_TOKEN)
        .json(&changes)
        .send()
        .await?;
    let response = utils::assert_ok_response(response).await?;
    let note3 = response.json::<Note>().await?;
    assert_eq!(note3.id, note1.id);
    assert_eq!(note3.title, "T");
    assert_eq!(note3.content, "C2");
    assert_eq!(note3.created_at, note1.created_at);
    assert!(note3.updated_at > note1.updated_at);

    // Only the owner sees the note.
    let response = client
        .get(&notes_url)
        .bearer_auth(utils::USER_TOKEN)
        .send()
        .await?;
    let response = utils::assert_ok_response(response).await?;
    assert_eq!(response.json::<Vec<Note>>().await?, vec![note3]);
    let response = client.get(&notes_url).bearer_auth("bob").send().await?;
    let response = utils::assert_ok_response(response).await?;
    assert!(response.json::<Vec<Note>>().await?.is_empty());
    let response = client.get(&note_url).bearer_auth("bob").send().await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Delete it and make sure it's gone.
    let response = client
        .delete(&note_url)
        .bearer_auth(utils::USER_TOKEN)
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = client
        .get(&note_url)
        .bearer_auth(utils::USER_TOKEN)
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error = response.json::<ErrorResponse>().await?;
    assert_eq!(error.error, "Note not found");
    let response = client
        .delete(&note_url)
        .bearer_auth(utils::USER_TOKEN)
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn notes_validation() -> Result<(), Box<dyn std::error::Error>> {
    let model_server = MockServer::start().await;
    let state = utils::memory_state(&model_server.uri()).await?;
    let base_url = utils::spawn_server(state).await?;
    let client = reqwest::Client::new();
    let notes_url = format!("{base_url}/api/notes");

    // Notes routes need a bearer token.
    let response = client.get(&notes_url).send().await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let error = response.json::<ErrorResponse>().await?;
    assert_eq!(error.error, "Unauthorized");

    // Titles can't be blank on create or update.
    let body = NewNoteRequest::builder().title("   ".to_string()).build();
    let response = client
        .post(&notes_url)
        .bearer_auth(utils::USER_TOKEN)
        .json(&body)
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = response.json::<ErrorResponse>().await?;
    assert_eq!(error.error, "Title is required");

    let body = NewNoteRequest::builder().title("Empty".to_string()).build();
    let response = client
        .post(&notes_url)
        .bearer_auth(utils::USER_TOKEN)
        .json(&body)
        .send()
        .await?;
    let response = utils::assert_ok_response(response).await?;
    let note = response.json::<Note>().await?;
    assert_eq!(note.content, "");

    let changes = UpdateNoteRequest::builder().title(String::new()).build();
    let response = client
        .put(format!("{notes_url}/{}", note.id))
        .bearer_auth(utils::USER_TOKEN)
        .json(&changes)
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unreadable bodies and IDs get the same error shape as everything else.
    let response = client
        .post(&notes_url)
        .bearer_auth(utils::USER_TOKEN)
        .header("content-type", "application/json")
        .body("{\"title\":")
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = response.json::<ErrorResponse>().await?;
    assert_eq!(error.error, "Invalid request body");

    let response = client
        .post(&notes_url)
        .bearer_auth(utils::USER_TOKEN)
        .body(r#"{"title":"No content type"}"#)
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = response.json::<ErrorResponse>().await?;
    assert_eq!(error.error, "Invalid request body");

    let response = client
        .get(format!("{notes_url}/not-a-uuid"))
        .bearer_auth(utils::USER_TOKEN)
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = response.json::<ErrorResponse>().await?;
    assert_eq!(error.error, "Invalid note ID");
    Ok(())
}
