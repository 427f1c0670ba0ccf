#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, HttpServer};
    use comptoir::app::App;
    use comptoir::config::AppConfig;
    use comptoir::db::Database;
    use leptos::get_configuration;
    use leptos::logging::log;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use std::io;

    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // Initialize the database
    let db = Database::new(&config.database_path)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    db.create_schema()
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let (menu, reviews) = db
        .seed_defaults()
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    log!("[DB] Schema ready ({} menu items, {} reviews seeded)", menu, reviews);

    // Load configuration
    let conf = get_configuration(None)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    log!("CORS origins: {:?}", config.cors_origins);
    log!("listening on http://{}", &addr);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        actix_web::App::new()
            .wrap(config.cors())
            .app_data(web::Data::new(db.clone()))
            // REST routes are registered before the Leptos routes
            .configure(comptoir::api::configure)
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Serve other assets from the `assets` directory
            .service(Files::new("/assets", site_root))
            .service(favicon)
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), App)
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydration entry point
    // see optional feature `csr` instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // prefer using `cargo leptos serve` instead
    // to run: `trunk serve --open --features csr`
    use comptoir::app::*;

    comptoir::utils::panic_hook::init();

    leptos::mount_to_body(App);
}
