use jotpad_core::api::NotesApi;
use jotpad_core::view::NotesController;

use crate::commands::common::{ensure_mutation_succeeded, open_notes, resolve_note, short_id};
use crate::error::CliError;

pub async fn run_edit<A: NotesApi>(
    api: A,
    id: &str,
    title: Option<String>,
    content: Option<String>,
) -> Result<(), CliError> {
    if title.is_none() && content.is_none() {
        return Err(CliError::NothingToEdit);
    }

    let mut controller = open_notes(api).await?;
    let label = edit_note(&mut controller, id, title, content).await?;
    println!("Updated note {label}");
    Ok(())
}

/// "Edit" on the resolved note, replace the given fields, "Update".
///
/// Returns the short id of the edited note.
pub async fn edit_note<A: NotesApi>(
    controller: &mut NotesController<A>,
    id: &str,
    title: Option<String>,
    content: Option<String>,
) -> Result<String, CliError> {
    let note = resolve_note(controller.view().notes(), id)?.clone();

    let view = controller.view_mut();
    view.open_edit(&note);
    if let Some(title) = title {
        view.set_title(title);
    }
    if let Some(content) = content {
        view.set_content(content);
    }

    let succeeded = controller.save().await;
    ensure_mutation_succeeded(controller, succeeded)?;
    Ok(short_id(&note))
}
