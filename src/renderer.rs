use anyhow::Context;
use handlebars::Handlebars;
use serde::Serialize;

use crate::metadata::PostMetadata;

const FRONTMATTER_TEMPLATE: &str = concat!(
    "---\n",
    "title: \"{{meta.title}}\"\n",
    "author: \"{{meta.author}}\"\n",
    "published: \"{{meta.published}}\"\n",
    "tags: {{tags}}\n",
    "---\n",
    "\n",
    "{{body}}",
);

#[derive(Serialize, Debug)]
pub(crate) struct PostPageData<'a> {
    pub meta: &'a PostMetadata,
    pub tags: String,
    pub body: String,
}

pub(crate) fn generate_renderer() -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    // values go into YAML and markdown, not HTML
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
        .register_template_string("frontmatter", FRONTMATTER_TEMPLATE)
        .context("frontmatter template")?;

    Ok(handlebars)
}
