use crate::compiler::CompileError;
use pagecraft_model::Website;
use serde_json::json;

/// Compile a PWA web app manifest for the website.
pub fn compile_manifest(website: &Website) -> Result<String, CompileError> {
    let manifest = json!({
        "name": website.name,
        "short_name": website.name,
        "start_url": "/",
        "display": "standalone",
        "background_color": website.settings.theme.background,
        "theme_color": website.settings.theme.primary_color,
        "description": website.settings.seo.description.clone().unwrap_or_default(),
        "icons": [
            {
                "src": "/icons/icon-192.png",
                "sizes": "192x192",
                "type": "image/png"
            },
            {
                "src": "/icons/icon-512.png",
                "sizes": "512x512",
                "type": "image/png"
            }
        ]
    });

    serde_json::to_string_pretty(&manifest).map_err(|e| CompileError::Generic(e.to_string()))
}
