//! Application state store.
//!
//! # Responsibility
//! - Own every application collection (customers, tasks, visit history,
//!   products, settings, toasts) and expose the full mutation API.
//! - Rewrite the affected collection to durable storage after each
//!   mutation and notify subscribed listeners.
//!
//! # Invariants
//! - All mutations and queries run synchronously on the caller's thread;
//!   callers observe new in-memory state as soon as a call returns, even
//!   when the durable write failed.
//! - One visit-history entry is appended per customer add or update;
//!   history is never edited in place.
//! - `delete_all_data` leaves products and settings untouched.

use crate::clock::{Clock, SystemClock};
use crate::ids::{IdGenerator, UuidIdGenerator, CUSTOMER_ID_PREFIX, TASK_ID_PREFIX, VISIT_ID_PREFIX};
use crate::model::customer::{Customer, CustomerDraft};
use crate::model::settings::{AppSettings, SettingsPatch};
use crate::model::task::{Task, TaskDraft};
use crate::model::toast::{Toast, ToastKind};
use crate::model::visit::VisitHistory;
use crate::model::ValidationError;
use crate::repo::collections::{load_or_default, persist};
use crate::repo::kv_repo::{keys, KeyValueRepository};
use crate::service::reminder::{LogReminderSink, ReminderIntent, ReminderSink};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// How long the oldest toast stays queued once its timer is armed.
pub const TOAST_DISPLAY_MS: i64 = 3000;

pub type StoreResult<T> = Result<T, StoreError>;

/// Mutation failure; the store's collections are unchanged when returned.
#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationError),
    CustomerNotFound(String),
    TaskNotFound(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::CustomerNotFound(id) => write!(f, "customer not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::CustomerNotFound(_) | Self::TaskNotFound(_) => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Which collection a mutation touched; delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Customers,
    Tasks,
    VisitHistory,
    Products,
    Settings,
    Toasts,
}

/// Handle returned by [`AppStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(StoreEvent)>;

/// Single owner of all application state.
///
/// Constructed once at process start and handed to every consuming view;
/// the view layer subscribes for re-render instead of polling.
pub struct AppStore<R: KeyValueRepository> {
    repo: R,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    reminders: Box<dyn ReminderSink>,
    customers: Vec<Customer>,
    tasks: Vec<Task>,
    visit_history: Vec<VisitHistory>,
    products: Vec<String>,
    settings: AppSettings,
    toasts: Vec<Toast>,
    toast_deadline: Option<i64>,
    last_toast_id: i64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

fn default_products() -> Vec<String> {
    vec!["Product A".to_string(), "Product B".to_string()]
}

impl<R: KeyValueRepository> AppStore<R> {
    /// Loads all collections from `repo` with production collaborators.
    pub fn new(repo: R) -> Self {
        Self::with_parts(
            repo,
            Box::new(SystemClock),
            Box::new(UuidIdGenerator),
            Box::new(LogReminderSink),
        )
    }

    /// Loads all collections from `repo` with injected collaborators.
    ///
    /// Absent or unparseable stored collections fall back to their
    /// documented defaults; startup never fails on bad storage.
    pub fn with_parts(
        repo: R,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdGenerator>,
        reminders: Box<dyn ReminderSink>,
    ) -> Self {
        let customers = load_or_default(&repo, keys::CUSTOMERS, Vec::new());
        let tasks = load_or_default(&repo, keys::TASKS, Vec::new());
        let visit_history = load_or_default(&repo, keys::VISIT_HISTORY, Vec::new());
        let products = load_or_default(&repo, keys::PRODUCTS, default_products());
        let settings = load_or_default(&repo, keys::SETTINGS, AppSettings::default());

        info!(
            "event=store_init module=store status=ok customers={} tasks={} visits={} products={}",
            customers.len(),
            tasks.len(),
            visit_history.len(),
            products.len()
        );

        Self {
            repo,
            clock,
            ids,
            reminders,
            customers,
            tasks,
            visit_history,
            products,
            settings,
            toasts: Vec::new(),
            toast_deadline: None,
            last_toast_id: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // ---- state access -----------------------------------------------------

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn visit_history(&self) -> &[VisitHistory] {
        &self.visit_history
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    // ---- customers --------------------------------------------------------

    /// Creates a customer and logs its first visit-history entry.
    ///
    /// # Contract
    /// - Assigns a fresh `cust_` id and `created_at`; prepends
    ///   (newest-first).
    /// - Appends exactly one visit-history entry snapshotting the record.
    /// - Emits a reminder intention for the scheduled visit.
    pub fn add_customer(&mut self, draft: CustomerDraft) -> StoreResult<String> {
        draft.validate()?;

        let customer = Customer {
            id: self.ids.next_id(CUSTOMER_ID_PREFIX),
            customer_name: draft.customer_name,
            mobile_number: draft.mobile_number,
            reference_by: draft.reference_by,
            product: draft.product,
            customer_type: draft.customer_type,
            remark: draft.remark,
            next_visit_date: draft.next_visit_date,
            next_visit_time: draft.next_visit_time,
            created_at: self.clock.now_iso(),
        };
        let id = customer.id.clone();

        info!("event=customer_add module=store status=ok id={id}");
        self.append_visit_entry(&customer);
        self.schedule_visit_reminder(&customer);
        self.customers.insert(0, customer);
        self.persist_customers();
        self.notify(StoreEvent::Customers);
        Ok(id)
    }

    /// Replaces the customer with the matching id in place.
    ///
    /// # Contract
    /// - Collection order is unchanged; `id` and `created_at` keep their
    ///   stored values regardless of what the caller passes.
    /// - Appends a visit-history entry identically to add.
    pub fn update_customer(&mut self, customer: Customer) -> StoreResult<()> {
        customer.validate()?;

        let Some(index) = self.customers.iter().position(|c| c.id == customer.id) else {
            return Err(StoreError::CustomerNotFound(customer.id));
        };

        let mut updated = customer;
        updated.created_at = self.customers[index].created_at.clone();

        info!("event=customer_update module=store status=ok id={}", updated.id);
        self.append_visit_entry(&updated);
        self.schedule_visit_reminder(&updated);
        self.customers[index] = updated;
        self.persist_customers();
        self.notify(StoreEvent::Customers);
        Ok(())
    }

    /// Linear lookup; an absent id is a normal outcome for callers.
    pub fn customer_by_id(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// All history entries for one customer, in stored newest-first order.
    pub fn visit_history_for_customer(&self, customer_id: &str) -> Vec<&VisitHistory> {
        self.visit_history
            .iter()
            .filter(|entry| entry.customer_id == customer_id)
            .collect()
    }

    // ---- tasks ------------------------------------------------------------

    /// Creates a task; new tasks always start incomplete.
    pub fn add_task(&mut self, draft: TaskDraft) -> StoreResult<String> {
        draft.validate()?;

        let task = Task {
            id: self.ids.next_id(TASK_ID_PREFIX),
            task_title: draft.task_title,
            description: draft.description,
            date_time: draft.date_time,
            priority: draft.priority,
            is_complete: false,
            set_reminder: draft.set_reminder,
        };
        let id = task.id.clone();

        info!("event=task_add module=store status=ok id={id}");
        if task.set_reminder {
            self.reminders.schedule(&ReminderIntent {
                subject: task.task_title.clone(),
                target_date: task.scheduled_date().to_string(),
                target_time: task.date_time.get(11..16).unwrap_or_default().to_string(),
            });
        }
        self.tasks.insert(0, task);
        self.persist_tasks();
        self.notify(StoreEvent::Tasks);
        Ok(id)
    }

    /// Replaces the task with the matching id; collection order unchanged.
    pub fn update_task(&mut self, task: Task) -> StoreResult<()> {
        task.validate()?;

        let Some(index) = self.tasks.iter().position(|t| t.id == task.id) else {
            return Err(StoreError::TaskNotFound(task.id));
        };

        info!("event=task_update module=store status=ok id={}", task.id);
        self.tasks[index] = task;
        self.persist_tasks();
        self.notify(StoreEvent::Tasks);
        Ok(())
    }

    /// Removes the task by id; a missing id is an idempotent no-op.
    pub fn delete_task(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return;
        }
        info!("event=task_delete module=store status=ok id={id}");
        self.persist_tasks();
        self.notify(StoreEvent::Tasks);
    }

    /// Flips completion for the matching task; no-op when absent.
    pub fn toggle_task_complete(&mut self, id: &str) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        task.is_complete = !task.is_complete;
        self.persist_tasks();
        self.notify(StoreEvent::Tasks);
    }

    pub fn task_by_id(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    // ---- products ---------------------------------------------------------

    /// Appends a product name after trimming.
    ///
    /// Returns `false` without mutating when the trimmed value is empty or
    /// already present (case-sensitive exact match).
    pub fn add_product(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() || self.products.iter().any(|p| p == trimmed) {
            return false;
        }
        self.products.push(trimmed.to_string());
        self.persist_products();
        self.notify(StoreEvent::Products);
        true
    }

    /// Removes the exact-match product; returns `false` when absent.
    pub fn remove_product(&mut self, name: &str) -> bool {
        let Some(index) = self.products.iter().position(|p| p == name) else {
            return false;
        };
        self.products.remove(index);
        self.persist_products();
        self.notify(StoreEvent::Products);
        true
    }

    // ---- settings ---------------------------------------------------------

    /// Merges the given fields into the settings record; unspecified fields
    /// keep their prior values.
    pub fn update_settings(&mut self, patch: SettingsPatch) {
        self.settings.apply(patch);
        self.persist_settings();
        self.notify(StoreEvent::Settings);
    }

    // ---- bulk reset -------------------------------------------------------

    /// Clears customers, tasks and visit history.
    ///
    /// Products and settings are configuration, not transactional data,
    /// and survive the wipe. Irreversible; the required user confirmation
    /// is the caller's responsibility.
    pub fn delete_all_data(&mut self) {
        warn!(
            "event=data_wipe module=store status=ok customers={} tasks={} visits={}",
            self.customers.len(),
            self.tasks.len(),
            self.visit_history.len()
        );
        self.customers.clear();
        self.tasks.clear();
        self.visit_history.clear();
        self.persist_customers();
        self.persist_tasks();
        self.persist_visit_history();
        self.notify(StoreEvent::Customers);
        self.notify(StoreEvent::Tasks);
        self.notify(StoreEvent::VisitHistory);
    }

    // ---- toasts -----------------------------------------------------------

    /// Queues a toast and returns its monotonic id.
    ///
    /// The expiry deadline is armed only when the queue transitions from
    /// empty to non-empty; inserting behind other toasts does not move it.
    pub fn add_toast(&mut self, message: impl Into<String>, kind: ToastKind) -> i64 {
        let now = self.clock.now_epoch_ms();
        let id = now.max(self.last_toast_id + 1);
        self.last_toast_id = id;

        let was_empty = self.toasts.is_empty();
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        if was_empty {
            self.toast_deadline = Some(now + TOAST_DISPLAY_MS);
        }
        self.notify(StoreEvent::Toasts);
        id
    }

    /// Deadline the host loop should wake at, when a toast is pending.
    pub fn next_toast_deadline(&self) -> Option<i64> {
        self.toast_deadline
    }

    /// Removes the oldest toast once the armed deadline has passed.
    ///
    /// Exactly one toast is removed per firing; the deadline is re-armed
    /// while the queue stays non-empty. Returns whether a toast expired.
    pub fn expire_due_toasts(&mut self) -> bool {
        let Some(deadline) = self.toast_deadline else {
            return false;
        };
        let now = self.clock.now_epoch_ms();
        if now < deadline || self.toasts.is_empty() {
            return false;
        }

        self.toasts.remove(0);
        self.toast_deadline = if self.toasts.is_empty() {
            None
        } else {
            Some(now + TOAST_DISPLAY_MS)
        };
        self.notify(StoreEvent::Toasts);
        true
    }

    // ---- observation ------------------------------------------------------

    /// Registers a listener invoked after every mutation.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, listener));
        id
    }

    /// Drops a listener; returns `false` when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&self, event: StoreEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    // ---- internals --------------------------------------------------------

    fn append_visit_entry(&mut self, customer: &Customer) {
        let entry = VisitHistory {
            id: self.ids.next_id(VISIT_ID_PREFIX),
            customer_id: customer.id.clone(),
            visit_date: self.clock.now_iso(),
            remark: customer.remark.clone(),
            customer_name: customer.customer_name.clone(),
            mobile_number: customer.mobile_number.clone(),
        };
        self.visit_history.insert(0, entry);
        self.persist_visit_history();
        self.notify(StoreEvent::VisitHistory);
    }

    fn schedule_visit_reminder(&self, customer: &Customer) {
        self.reminders.schedule(&ReminderIntent {
            subject: customer.customer_name.clone(),
            target_date: customer.next_visit_date.clone(),
            target_time: customer.next_visit_time.clone(),
        });
    }

    // In-memory state stays authoritative when a durable write fails;
    // persist() logs the failure and the outcome is dropped here on
    // purpose so a storage fault never interrupts the caller's flow.

    fn persist_customers(&self) {
        let _ = persist(&self.repo, keys::CUSTOMERS, &self.customers);
    }

    fn persist_tasks(&self) {
        let _ = persist(&self.repo, keys::TASKS, &self.tasks);
    }

    fn persist_visit_history(&self) {
        let _ = persist(&self.repo, keys::VISIT_HISTORY, &self.visit_history);
    }

    fn persist_products(&self) {
        let _ = persist(&self.repo, keys::PRODUCTS, &self.products);
    }

    fn persist_settings(&self) {
        let _ = persist(&self.repo, keys::SETTINGS, &self.settings);
    }
}
