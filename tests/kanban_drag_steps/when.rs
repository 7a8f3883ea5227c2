//! When steps for kanban board BDD scenarios.

use super::world::{KanbanWorld, parse_status, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::task::{
    domain::{DragResult, DropLocation, TaskId},
    services::CreateTaskRequest,
};

fn handle_gesture(world: &mut KanbanWorld, gesture: &DragResult) -> Result<(), eyre::Report> {
    world.snapshot_before_gesture =
        run_async(world.service.snapshot()).wrap_err("snapshot board before gesture")?;
    world.last_gesture_result = Some(run_async(world.service.handle_drag_end(gesture)));
    Ok(())
}

#[when(r#"task "{title}" is dragged from "{from}" {from_index:usize} to "{to}" {to_index:usize}"#)]
fn task_dragged(
    world: &mut KanbanWorld,
    title: String,
    from: String,
    from_index: usize,
    to: String,
    to_index: usize,
) -> Result<(), eyre::Report> {
    let gesture = DragResult::dropped(
        world.task_id(&title)?,
        DropLocation::new(parse_status(&from)?, from_index),
        DropLocation::new(parse_status(&to)?, to_index),
    );
    handle_gesture(world, &gesture)
}

#[when(r#"task "{title}" is released outside the board from "{from}" {from_index:usize}"#)]
fn task_released_outside(
    world: &mut KanbanWorld,
    title: String,
    from: String,
    from_index: usize,
) -> Result<(), eyre::Report> {
    let gesture = DragResult::released_outside(
        world.task_id(&title)?,
        DropLocation::new(parse_status(&from)?, from_index),
    );
    handle_gesture(world, &gesture)
}

#[when(r#"an unknown task is dragged from "{from}" {from_index:usize} to "{to}" {to_index:usize}"#)]
fn unknown_task_dragged(
    world: &mut KanbanWorld,
    from: String,
    from_index: usize,
    to: String,
    to_index: usize,
) -> Result<(), eyre::Report> {
    let gesture = DragResult::dropped(
        TaskId::new(),
        DropLocation::new(parse_status(&from)?, from_index),
        DropLocation::new(parse_status(&to)?, to_index),
    );
    handle_gesture(world, &gesture)
}

#[when(r#"the form is submitted with title "{title}""#)]
fn form_submitted(world: &mut KanbanWorld, title: String) {
    let result = run_async(
        world
            .form
            .submit(&world.service, CreateTaskRequest::new(title.clone())),
    );
    if let Ok(ref task) = result {
        world.task_ids.insert(title, task.id());
    }
    world.last_submission = Some(result);
}

#[when("the form is submitted without a title")]
fn form_submitted_without_title(world: &mut KanbanWorld) {
    let result = run_async(world.form.submit(&world.service, CreateTaskRequest::new("")));
    world.last_submission = Some(result);
}
