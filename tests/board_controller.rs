//! End-to-end scenarios for the board controller and the to-do list.

use std::cell::RefCell;
use std::rc::Rc;

use tareas_board::{
    Board, BoardController, BoardEvent, DragGestureProvider, DropEvent, IdGenerator, Position,
    Priority, Status, TodoList,
};

fn controller() -> BoardController {
    BoardController::with_board(Board::new(), IdGenerator::with_clock(|| 1_700_000_000_000))
}

fn texts(controller: &BoardController, status: Status) -> Vec<String> {
    controller
        .board()
        .column(status)
        .tasks
        .iter()
        .map(|t| t.text.clone())
        .collect()
}

#[test]
fn add_edit_delete_lifecycle() {
    let mut controller = controller();

    let id = controller.add_task("Buy milk").unwrap();
    let pending = &controller.board().column(Status::Pending).tasks;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].text, "Buy milk");
    assert_eq!(pending[0].priority, Priority::Low);
    assert_eq!(pending[0].status, Status::Pending);
    assert!(pending[0].comment.is_none());

    let task = pending[0].clone();
    controller.begin_edit(&task);
    assert!(controller.update_edit_field_str("priority", "high").unwrap());
    assert!(controller.commit_edit());

    let task = controller.board().get_task(id).unwrap();
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.status, Status::Pending);

    let column: Status = "pending".parse().unwrap();
    controller.request_delete(column, id);
    assert!(controller.confirm_delete().is_some());
    assert!(controller.board().column(Status::Pending).is_empty());
}

#[test]
fn dragging_second_pending_task_to_the_next_column() {
    let mut controller = controller();
    controller.add_task("first");
    controller.add_task("second");

    let destination: Status = "en-proceso".parse().unwrap();
    assert!(controller.move_task(Status::Pending, 1, destination, 0));

    assert_eq!(texts(&controller, Status::Pending), ["first"]);
    let in_progress = &controller.board().column(Status::InProgress).tasks;
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].text, "second");
    assert_eq!(in_progress[0].status, Status::InProgress);
}

#[test]
fn blank_text_is_ignored() {
    let mut controller = controller();
    assert!(controller.add_task("").is_none());
    assert!(controller.add_task("   ").is_none());
    assert_eq!(controller.board().total_tasks(), 0);
}

#[test]
fn commit_without_staged_copy_changes_nothing() {
    let mut controller = controller();
    controller.add_task("untouched");
    let before = controller.board().clone();

    assert!(!controller.commit_edit());
    assert_eq!(controller.board(), &before);
}

#[test]
fn confirm_delete_removes_exactly_one_task() {
    let mut controller = controller();
    let ids: Vec<_> = ["a", "b", "c"]
        .iter()
        .filter_map(|t| controller.add_task(t))
        .collect();

    controller.request_delete(Status::Pending, ids[1]);
    let removed = controller.confirm_delete().unwrap();

    assert_eq!(removed.id, ids[1]);
    assert_eq!(texts(&controller, Status::Pending), ["a", "c"]);
    assert!(controller.confirm_delete().is_none(), "staged state cleared");
}

#[test]
fn drops_through_a_provider() {
    /// A provider that completes a drag on every gesture.
    struct Instant;

    impl DragGestureProvider for Instant {
        type Gesture = (Position, Option<Position>);

        fn interpret(&mut self, (source, destination): Self::Gesture) -> Option<DropEvent> {
            Some(DropEvent { source, destination })
        }

        fn is_dragging(&self) -> bool {
            false
        }
    }

    let mut controller = controller();
    controller.add_task("card");
    let source = Position::new(Status::Pending, 0);

    // Released outside every column.
    assert!(!controller.drive(&mut Instant, (source, None)));
    // Index far past the end is clamped to an append.
    let far = Position::new(Status::Processed, 99);
    assert!(controller.drive(&mut Instant, (source, Some(far))));

    let processed = &controller.board().column(Status::Processed).tasks;
    assert_eq!(processed[0].text, "card");
    assert_eq!(processed[0].status, Status::Processed);
}

#[test]
fn observers_see_each_effective_change() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut controller = controller();
    let subscription = controller.subscribe(Box::new(move |event: &BoardEvent| {
        sink.borrow_mut().push(*event);
    }));

    let id = controller.add_task("watched").unwrap();
    // Same slot: no event.
    controller.move_task(Status::Pending, 0, Status::Pending, 0);
    controller.move_task(Status::Pending, 0, Status::Processed, 0);
    controller.request_delete(Status::Processed, id);
    controller.cancel_delete();

    assert!(controller.unsubscribe(subscription));
    controller.add_task("unwatched");

    let seen = seen.borrow();
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[0], BoardEvent::TaskAdded { id });
    assert!(matches!(seen[1], BoardEvent::TaskMoved { to, .. } if to.column == Status::Processed));
    assert_eq!(
        seen[3],
        BoardEvent::DeleteCancelled {
            column: Status::Processed,
            id
        }
    );
}

#[test]
fn ids_stay_unique_within_one_clock_tick() {
    let mut controller = controller();
    let a = controller.add_task("a").unwrap();
    let b = controller.add_task("b").unwrap();
    let c = controller.add_task("c").unwrap();

    assert!(a < b && b < c);
    assert!(controller.board().is_consistent());
}

#[test]
fn todo_list_basic_flow() {
    let mut list = TodoList::new();
    assert!(list.add("  ").is_none());

    let milk = list.add("Buy milk").unwrap();
    let bread = list.add("Buy bread").unwrap();
    assert_eq!(list.remaining(), 2);

    assert_eq!(list.toggle(milk), Some(true));
    assert_eq!(list.remaining(), 1);
    assert_eq!(list.toggle(milk), Some(false));

    assert!(list.delete(bread));
    assert!(!list.delete(bread));
    assert_eq!(list.len(), 1);
    assert_eq!(list.items()[0].text, "Buy milk");
}
