use jotpad_core::api::NotesApi;
use jotpad_core::view::NotesController;

use crate::commands::common::{ensure_mutation_succeeded, open_notes};
use crate::error::CliError;

pub async fn run_add<A: NotesApi>(api: A, title: &str, content: &str) -> Result<(), CliError> {
    let mut controller = open_notes(api).await?;
    create_note(&mut controller, title, content).await?;

    let label = if title.trim().is_empty() {
        "(untitled)"
    } else {
        title.trim()
    };
    println!(
        "Created note \"{label}\" ({} notes)",
        controller.view().notes().len()
    );
    Ok(())
}

/// "New Note", fill the draft, "Save".
pub async fn create_note<A: NotesApi>(
    controller: &mut NotesController<A>,
    title: &str,
    content: &str,
) -> Result<(), CliError> {
    let view = controller.view_mut();
    view.open_new();
    view.set_title(title);
    view.set_content(content);

    let succeeded = controller.save().await;
    ensure_mutation_succeeded(controller, succeeded)
}
