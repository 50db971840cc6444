use jotpad_core::api::NotesApi;

use crate::commands::common::{format_note_lines, note_to_list_item, open_notes, NoteListItem};
use crate::error::CliError;

pub async fn run_list<A: NotesApi>(api: A, as_json: bool) -> Result<(), CliError> {
    let controller = open_notes(api).await?;
    let notes = controller.view().notes();

    if as_json {
        let json_items = notes
            .iter()
            .map(note_to_list_item)
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if notes.is_empty() {
        println!("No notes yet. Create one with `jotpad add`.");
    } else {
        for line in format_note_lines(notes) {
            println!("{line}");
        }
    }

    Ok(())
}
