//! Task store
//!
//! Owns the ordered task collection and performs every mutation. After
//! each mutating operation the whole collection is persisted through the
//! injected [`TaskStorage`] backend and all subscribed observers receive
//! a fresh snapshot. Everything runs synchronously on the calling
//! thread; there is no locking because there is no concurrent access.

use anyhow::Result;
use log::warn;
use std::rc::Rc;

use crate::storage::TaskStorage;
use crate::task::{Priority, Task, TaskKind, TaskRecord};

/// Token returned by [`TaskStore::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(u64);

type Observer = Rc<dyn Fn(&[Task])>;

/// The component owning the task collection
///
/// Tasks are kept in insertion order, which is also display order.
/// Consumers never receive references into the internal storage; reads
/// hand out cloned snapshots.
pub struct TaskStore<S: TaskStorage> {
    tasks: Vec<Task>,
    observers: Vec<(ObserverId, Observer)>,
    next_observer_id: u64,
    storage: S,
}

impl<S: TaskStorage> TaskStore<S> {
    /// Create a store and load any previously persisted tasks
    ///
    /// When storage holds a value, each record is converted back into a
    /// task and one notification pass runs. When nothing has ever been
    /// saved the store starts empty and observers are not notified.
    ///
    /// # Errors
    /// Unreadable or malformed persisted data fails here rather than
    /// being silently discarded.
    pub fn open(storage: S) -> Result<Self> {
        let mut store = Self {
            tasks: Vec::new(),
            observers: Vec::new(),
            next_observer_id: 0,
            storage,
        };

        if let Some(records) = store.storage.load()? {
            store.tasks = records
                .into_iter()
                .map(TaskRecord::into_task)
                .collect::<Result<Vec<_>>>()?;
            store.notify_observers();
        }

        Ok(store)
    }

    /// Append a new prioritized task
    ///
    /// The store performs no title validation: an empty or duplicate
    /// title is stored as-is. Callers run
    /// [`validate_new_title`](crate::validation::validate_new_title)
    /// first.
    ///
    /// # Errors
    /// A persistence failure is returned after the task has been added
    /// in memory and observers have been notified; the in-memory state
    /// stays authoritative.
    pub fn add_task(&mut self, title: impl Into<String>, priority: Priority) -> Result<()> {
        let task = Task::new(TaskKind::Prioritized(priority), title);
        self.tasks.push(task);
        self.commit()
    }

    /// Snapshot copy of the current task sequence, in insertion order
    pub fn all_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Display titles of all tasks, in insertion order
    pub fn display_titles(&self) -> Vec<String> {
        self.tasks.iter().map(Task::display_title).collect()
    }

    /// Snapshot of the prioritized tasks only
    pub fn prioritized_tasks(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| matches!(task.kind, TaskKind::Prioritized(_)))
            .cloned()
            .collect()
    }

    /// Flip completion for the task with the given id
    ///
    /// An unknown id is silently ignored: nothing is persisted and no
    /// observers fire.
    pub fn toggle_completion(&mut self, id: &str) -> Result<()> {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.toggle_completion();
                self.commit()
            }
            None => Ok(()),
        }
    }

    /// Remove the task with the given id
    ///
    /// The collection is persisted and observers are notified whether or
    /// not a task matched; an unknown id leaves the sequence unchanged.
    pub fn remove_task(&mut self, id: &str) -> Result<()> {
        self.tasks.retain(|task| task.id != id);
        self.commit()
    }

    /// Case-insensitive membership test over current titles
    pub fn task_exists(&self, title: &str) -> bool {
        let needle = title.to_lowercase();
        self.tasks
            .iter()
            .any(|task| task.title.to_lowercase() == needle)
    }

    /// Register an observer invoked with the full task snapshot after
    /// every mutation
    ///
    /// Observers run synchronously, in registration order. The returned
    /// token is the handle for [`TaskStore::unsubscribe`].
    pub fn subscribe(&mut self, observer: impl Fn(&[Task]) + 'static) -> ObserverId {
        self.next_observer_id += 1;
        let id = ObserverId(self.next_observer_id);
        self.observers.push((id, Rc::new(observer)));
        id
    }

    /// Deregister an observer; unknown tokens are ignored
    pub fn unsubscribe(&mut self, id: ObserverId) {
        self.observers.retain(|(observer_id, _)| *observer_id != id);
    }

    /// Persist the collection, then notify observers
    ///
    /// Observers see the mutation even when persistence fails; the error
    /// is logged and handed back to the caller.
    fn commit(&mut self) -> Result<()> {
        let persisted = self.persist();
        self.notify_observers();
        persisted
    }

    fn persist(&self) -> Result<()> {
        let records: Vec<TaskRecord> = self.tasks.iter().map(TaskRecord::from_task).collect();
        if let Err(e) = self.storage.save(&records) {
            warn!("failed to persist {} task(s): {e:#}", records.len());
            return Err(e);
        }
        Ok(())
    }

    fn notify_observers(&self) {
        // Iterate over a snapshot of the observer list, not the list itself.
        let observers: Vec<Observer> = self
            .observers
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        let snapshot = self.all_tasks();
        for observer in observers {
            observer(&snapshot);
        }
    }
}
