use async_trait::async_trait;
use recipe_scrape::{
    CompletionError, CompletionProvider, ExtractionOutcome, Ingredient, MergePolicy,
    RecipeScraper, ScrapeError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Returns a fixed response and records what it was asked.
struct StubProvider {
    response: Result<String, String>,
    calls: Arc<AtomicUsize>,
    last_text: Arc<Mutex<Option<String>>>,
}

impl StubProvider {
    fn replying(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
            last_text: Arc::new(Mutex::new(None)),
        }
    }

    fn failing() -> Self {
        Self {
            response: Err("service unavailable".to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
            last_text: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    fn provider_name(&self) -> &str {
        "stub"
    }

    async fn complete(&self, system_prompt: &str, text: &str) -> Result<String, CompletionError> {
        assert!(system_prompt.starts_with("Extract the recipe details"));
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(text.to_string());
        self.response
            .clone()
            .map_err(CompletionError::MalformedResponse)
    }
}

const COMPLETE_PAGE: &str = r#"
    <!DOCTYPE html>
    <html>
    <head>
        <meta name="description" content="A warm soup">
    </head>
    <body>
        <h1>Soup</h1>
        <ul>
            <li class="ingredient">Water</li>
            <li class="ingredient">Salt</li>
        </ul>
        <ol>
            <li class="instruction">Boil water</li>
            <li class="instruction">Add salt</li>
        </ol>
        <a class="category" href="/dinner">Dinner</a>
    </body>
    </html>
"#;

const NO_INSTRUCTIONS_PAGE: &str = r#"
    <!DOCTYPE html>
    <html>
    <head>
        <meta name="description" content="From the page">
        <script>var tracking = "ignore me";</script>
    </head>
    <body>
        <h1>Tomato Soup</h1>
        <ul>
            <li class="ingredient">Tomatoes</li>
        </ul>
        <p>Simmer the tomatoes for an hour.</p>
    </body>
    </html>
"#;

async fn serve(server: &mut mockito::ServerGuard, path: &str, body: &str) -> mockito::Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn test_complete_page_skips_fallback() {
    let mut server = mockito::Server::new_async().await;
    let _m = serve(&mut server, "/soup", COMPLETE_PAGE).await;

    let stub = StubProvider::replying("Should not be used");
    let calls = stub.calls.clone();
    let scraper = RecipeScraper::builder()
        .completion_provider(Box::new(stub))
        .build()
        .unwrap();

    let result = scraper
        .scrape(&format!("{}/soup", server.url()))
        .await
        .unwrap();

    assert_eq!(result.outcome, ExtractionOutcome::Structural);
    assert_eq!(result.recipe.title, "Soup");
    assert_eq!(result.recipe.description, "A warm soup");
    assert_eq!(result.recipe.instructions, vec!["Boil water", "Add salt"]);
    assert_eq!(
        result.recipe.ingredients,
        vec![Ingredient::named("Water"), Ingredient::named("Salt")]
    );
    assert_eq!(result.recipe.categories, vec!["Dinner"]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_instructions_uses_fallback() {
    let mut server = mockito::Server::new_async().await;
    let _m = serve(&mut server, "/tomato", NO_INSTRUCTIONS_PAGE).await;

    let stub = StubProvider::replying(
        "Tomato Soup\nA rich soup\nInstructions:\nSimmer the tomatoes\nBlend\nIngredients:\nTomatoes\nSalt\nCategories:\nLunch",
    );
    let calls = stub.calls.clone();
    let last_text = stub.last_text.clone();
    let scraper = RecipeScraper::builder()
        .completion_provider(Box::new(stub))
        .build()
        .unwrap();

    let result = scraper
        .scrape(&format!("{}/tomato", server.url()))
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let sent = last_text.lock().unwrap().clone().unwrap();
    assert!(sent.contains("Tomato Soup\nTomatoes\nSimmer the tomatoes for an hour."));
    assert!(!sent.contains("ignore me"));

    assert_eq!(result.outcome, ExtractionOutcome::Completed);
    assert_eq!(result.recipe.title, "Tomato Soup");
    assert_eq!(result.recipe.description, "A rich soup");
    assert_eq!(
        result.recipe.instructions,
        vec!["Simmer the tomatoes", "Blend"]
    );
    // Ingredients were found on the page, so they are kept
    assert_eq!(result.recipe.ingredients, vec![Ingredient::named("Tomatoes")]);
    assert_eq!(result.recipe.categories, vec!["Lunch"]);
}

#[tokio::test]
async fn test_replace_sections_policy() {
    let mut server = mockito::Server::new_async().await;
    let _m = serve(&mut server, "/tomato", NO_INSTRUCTIONS_PAGE).await;

    let scraper = RecipeScraper::builder()
        .completion_provider(Box::new(StubProvider::replying(
            "Other title\nOther description\nInstructions:\nSimmer\nIngredients:\nTomatoes\nSalt",
        )))
        .merge_policy(MergePolicy::ReplaceSections)
        .build()
        .unwrap();

    let result = scraper
        .scrape(&format!("{}/tomato", server.url()))
        .await
        .unwrap();

    assert_eq!(result.outcome, ExtractionOutcome::Completed);
    assert_eq!(result.recipe.title, "Tomato Soup");
    assert_eq!(result.recipe.description, "From the page");
    assert_eq!(result.recipe.instructions, vec!["Simmer"]);
    assert_eq!(
        result.recipe.ingredients,
        vec![Ingredient::named("Tomatoes"), Ingredient::named("Salt")]
    );
    assert!(result.recipe.categories.is_empty());
}

#[tokio::test]
async fn test_failing_fallback_returns_degraded_result() {
    let mut server = mockito::Server::new_async().await;
    let _m = serve(&mut server, "/tomato", NO_INSTRUCTIONS_PAGE).await;

    let stub = StubProvider::failing();
    let calls = stub.calls.clone();
    let scraper = RecipeScraper::builder()
        .completion_provider(Box::new(stub))
        .build()
        .unwrap();

    let result = scraper
        .scrape(&format!("{}/tomato", server.url()))
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(result.is_degraded());
    assert_eq!(result.recipe.title, "Tomato Soup");
    assert!(result.recipe.instructions.is_empty());
    assert_eq!(result.recipe.ingredients, vec![Ingredient::named("Tomatoes")]);
}

#[tokio::test]
async fn test_empty_page_without_completion() {
    let mut server = mockito::Server::new_async().await;
    let _m = serve(&mut server, "/blank", "<html><body></body></html>").await;

    let scraper = RecipeScraper::builder()
        .without_completion()
        .build()
        .unwrap();

    let result = scraper
        .scrape(&format!("{}/blank", server.url()))
        .await
        .unwrap();

    assert!(result.is_degraded());
    assert_eq!(result.recipe.title, "Untitled");
    assert!(result.recipe.description.is_empty());
    assert!(result.recipe.instructions.is_empty());
    assert!(result.recipe.ingredients.is_empty());
    assert!(result.recipe.categories.is_empty());
}

#[tokio::test]
async fn test_error_status_fails_without_fallback() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body("<html><body><h1>Not found</h1></body></html>")
        .create_async()
        .await;

    let stub = StubProvider::replying("Soup");
    let calls = stub.calls.clone();
    let scraper = RecipeScraper::builder()
        .completion_provider(Box::new(stub))
        .build()
        .unwrap();

    let err = scraper
        .scrape(&format!("{}/missing", server.url()))
        .await
        .unwrap_err();

    assert!(err.is_fetch_error());
    assert!(matches!(err, ScrapeError::HttpStatus { .. }));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_scrape_is_repeatable() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/soup")
        .with_status(200)
        .with_body(COMPLETE_PAGE)
        .expect(2)
        .create_async()
        .await;

    let scraper = RecipeScraper::builder()
        .without_completion()
        .build()
        .unwrap();
    let url = format!("{}/soup", server.url());

    let first = scraper.scrape(&url).await.unwrap();
    let second = scraper.scrape(&url).await.unwrap();

    assert_eq!(
        serde_json::to_vec(&first.recipe).unwrap(),
        serde_json::to_vec(&second.recipe).unwrap()
    );
}

#[tokio::test]
async fn test_scrape_html_without_network() {
    let scraper = RecipeScraper::builder()
        .completion_provider(Box::new(StubProvider::replying("")))
        .build()
        .unwrap();

    let result = scraper
        .scrape_html("https://example.com/tomato", NO_INSTRUCTIONS_PAGE)
        .await
        .unwrap();

    // An empty completion still counts as completed, it just adds nothing
    assert_eq!(result.outcome, ExtractionOutcome::Completed);
    assert_eq!(result.recipe.title, "Tomato Soup");
    assert_eq!(result.recipe.description, "From the page");
    assert!(result.recipe.instructions.is_empty());
}
