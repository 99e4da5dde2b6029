use once_cell::sync::Lazy;
use tera::{Context, Tera};

use errors::Error;

// templates are compiled into the binary; tera autoescapes the .html names
static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();

    tera.add_raw_templates(vec![
        ("index.html", include_str!("../templates/index.html")),
        ("detail.html", include_str!("../templates/detail.html")),
        ("results.html", include_str!("../templates/results.html")),
    ])
    .expect("failed to register templates");

    tera
});

pub fn render(name: &str, context: &Context) -> Result<String, Error> {
    let html = TEMPLATES.render(name, context)?;

    Ok(html)
}
