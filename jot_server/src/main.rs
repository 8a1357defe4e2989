use ctrlc::set_handler;
use tokio::net::TcpListener;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Note-taking Server",
    description = "Endpoints for keeping notes and summarizing them"
))]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    let state = jot_server::init().await?;
    let binding_addr = state.server_config.bind_addr.clone();

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(jot_server::router(state))
        .split_for_parts();
    let router = router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api));
    let router = jot_server::with_layers(router);

    let listener = TcpListener::bind(&binding_addr).await?;
    info!("listening on {binding_addr}");
    axum::serve(listener, router).await?;
    Ok(())
}
