use jotpad_core::api::NotesApi;

use crate::commands::common::{
    display_title, ensure_mutation_succeeded, open_notes, resolve_note,
};
use crate::error::CliError;

pub async fn run_delete<A: NotesApi>(api: A, id: &str) -> Result<(), CliError> {
    let mut controller = open_notes(api).await?;
    let note = resolve_note(controller.view().notes(), id)?.clone();

    let succeeded = controller.remove(&note.id).await;
    ensure_mutation_succeeded(&mut controller, succeeded)?;

    println!("Deleted note {} \"{}\"", note.id, display_title(&note));
    Ok(())
}
