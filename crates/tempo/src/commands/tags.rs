//! Tag listing.

use chrono::Local;
use tabled::Tabled;

use tempo_core::{Session, Tag, TimeStore};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&Tag> for TagRow {
    fn from(t: &Tag) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name.clone(),
        }
    }
}

pub async fn handle(session: &mut Session, global: &GlobalOpts) -> Result<(), CliError> {
    let mut store = TimeStore::new(
        session.api(),
        session.org_id()?,
        session.notices(),
        session.timer(),
        Local::now().date_naive(),
    );
    store.load_tags().await?;

    let out = output::render_list(&global.output, store.tags(), |x| TagRow::from(x), |t| {
        t.id.to_string()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
