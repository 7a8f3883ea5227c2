//! Board flows driven through the board service over the in-memory store.

use crate::in_memory::helpers::{TestService, add, assert_partitioned, column_titles, service};
use rstest::rstest;
use taskboard::task::{
    domain::{DragOutcome, DragResult, DropLocation, RawDragResult, TaskId, TaskStatus},
    services::BoardError,
};

fn gesture(task_id: TaskId, from: TaskStatus, to: TaskStatus) -> DragResult {
    DragResult::dropped(task_id, DropLocation::new(from, 0), DropLocation::new(to, 0))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeating_a_move_after_it_landed_is_no_op(service: TestService) -> eyre::Result<()> {
    let t1 = add(&service, "T1", TaskStatus::Pending).await;
    add(&service, "T2", TaskStatus::Pending).await;
    add(&service, "T3", TaskStatus::InProgress).await;

    let first_gesture = DragResult::dropped(
        t1,
        DropLocation::new(TaskStatus::Pending, 0),
        DropLocation::new(TaskStatus::InProgress, 1),
    );
    let first = service.handle_drag_end(&first_gesture).await?;
    eyre::ensure!(first.mutates_store());

    eyre::ensure!(column_titles(&service, TaskStatus::Pending).await == ["T2"]);
    eyre::ensure!(column_titles(&service, TaskStatus::InProgress).await == ["T1", "T3"]);

    let before = service.snapshot().await?;
    let repeat = service.handle_drag_end(&first_gesture).await?;

    eyre::ensure!(repeat == DragOutcome::Unchanged { task_id: t1 });
    eyre::ensure!(service.snapshot().await? == before);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sequential_gestures_never_show_task_twice(service: TestService) -> eyre::Result<()> {
    let t1 = add(&service, "T1", TaskStatus::Pending).await;
    add(&service, "T2", TaskStatus::Completed).await;

    service
        .handle_drag_end(&gesture(t1, TaskStatus::Pending, TaskStatus::InProgress))
        .await?;
    assert_partitioned(&service.snapshot().await?)?;
    eyre::ensure!(column_titles(&service, TaskStatus::InProgress).await == ["T1"]);

    service
        .handle_drag_end(&gesture(t1, TaskStatus::InProgress, TaskStatus::Completed))
        .await?;
    assert_partitioned(&service.snapshot().await?)?;
    eyre::ensure!(column_titles(&service, TaskStatus::InProgress).await.is_empty());
    eyre::ensure!(column_titles(&service, TaskStatus::Completed).await == ["T1", "T2"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_gestures_keep_partition(service: TestService) -> eyre::Result<()> {
    let mut ids = Vec::new();
    for index in 0..16 {
        ids.push(add(&service, &format!("task-{index}"), TaskStatus::Pending).await);
    }

    let mut handles = Vec::new();
    for (index, task_id) in ids.iter().copied().enumerate() {
        let board = service.clone();
        let to = if index % 2 == 0 {
            TaskStatus::InProgress
        } else {
            TaskStatus::Completed
        };
        handles.push(tokio::spawn(async move {
            board
                .handle_drag_end(&gesture(task_id, TaskStatus::Pending, to))
                .await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    let snapshot = service.snapshot().await?;
    assert_partitioned(&snapshot)?;
    eyre::ensure!(column_titles(&service, TaskStatus::Pending).await.is_empty());
    eyre::ensure!(column_titles(&service, TaskStatus::InProgress).await.len() == 8);
    eyre::ensure!(column_titles(&service, TaskStatus::Completed).await.len() == 8);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn raw_gesture_from_rendering_layer_moves_task(service: TestService) -> eyre::Result<()> {
    let t1 = add(&service, "From JSON", TaskStatus::Pending).await;
    let payload = format!(
        r#"{{
            "draggableId": "{t1}",
            "source": {{ "droppableId": "pending", "index": 0 }},
            "destination": {{ "droppableId": "completed", "index": 0 }}
        }}"#
    );
    let raw: RawDragResult = serde_json::from_str(&payload)?;

    let outcome = service.handle_raw_drag_end(&raw).await?;

    eyre::ensure!(outcome.mutates_store());
    eyre::ensure!(column_titles(&service, TaskStatus::Completed).await == ["From JSON"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn raw_gesture_with_unknown_column_is_invalid_input(
    service: TestService,
) -> eyre::Result<()> {
    let t1 = add(&service, "Stays", TaskStatus::Pending).await;
    let payload = format!(
        r#"{{
            "draggableId": "{t1}",
            "source": {{ "droppableId": "pending", "index": 0 }},
            "destination": {{ "droppableId": "archive", "index": 0 }}
        }}"#
    );
    let raw: RawDragResult = serde_json::from_str(&payload)?;

    let result = service.handle_raw_drag_end(&raw).await;

    eyre::ensure!(matches!(&result, Err(err) if err.is_invalid_input()));
    eyre::ensure!(column_titles(&service, TaskStatus::Pending).await == ["Stays"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn services_sharing_a_store_see_each_other(service: TestService) -> eyre::Result<()> {
    let other: TestService = service.clone();
    let t1 = add(&other, "Shared", TaskStatus::Pending).await;

    service
        .update_task_status(t1, TaskStatus::InProgress)
        .await?;

    let seen = other.tasks_by_status(TaskStatus::InProgress).await?;
    eyre::ensure!(seen.first().map(|task| task.id()) == Some(t1));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_errors_classify_not_found(service: TestService) {
    let result = service
        .handle_drag_end(&gesture(
            TaskId::new(),
            TaskStatus::Pending,
            TaskStatus::Completed,
        ))
        .await;

    assert!(matches!(&result, Err(err) if err.is_not_found() && !err.is_invalid_input()));
    assert!(matches!(result, Err(BoardError::Store(_))));
}
