//! Limit orders: list, create, edit and delete.

#[cfg(test)]
#[path = "limit_orders_test.rs"]
mod limit_orders_test;

use leptos::prelude::*;
use wire::format;
use wire::types::{CreateOrderRequest, Dex, LimitOrder, OrderType, TradeSide, UpdateOrderRequest, WRAPPED_SOL_MINT};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::protected_page::ProtectedPage;
use crate::components::view_status::ViewStatus;
use crate::state::auth::AuthState;
use crate::state::query::{refresh, run_mutation, use_authed_query};
use crate::state::toast::{ToastState, notify_failure};
use crate::util::forms::{MISSING_FIELDS, non_negative, positive, required};

type Invalid = (&'static str, &'static str);

const INVALID_NUMBERS: Invalid = ("Invalid Values", "Amount and trigger price must be greater than zero");

/// Create form as typed by the user.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderForm {
    pub mint: String,
    pub amount: String,
    pub dex: Dex,
    pub order_type: OrderType,
    pub trigger_price: String,
    pub slippage: String,
    pub tip: String,
    pub side: TradeSide,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            mint: String::new(),
            amount: String::new(),
            dex: Dex::Jupiter,
            order_type: OrderType::High,
            trigger_price: String::new(),
            slippage: "10".to_owned(),
            tip: "0.001".to_owned(),
            side: TradeSide::Buy,
        }
    }
}

impl OrderForm {
    pub fn to_create_request(&self) -> Result<CreateOrderRequest, Invalid> {
        let Some(mint) = required(&self.mint) else {
            return Err(("Missing Fields", MISSING_FIELDS));
        };
        let numbers = EditForm {
            amount: self.amount.clone(),
            trigger_price: self.trigger_price.clone(),
            slippage: self.slippage.clone(),
            tip: self.tip.clone(),
        }
        .to_update_request()?;
        Ok(CreateOrderRequest {
            mint,
            amount: numbers.amount,
            dex: self.dex,
            order_type: self.order_type,
            trigger_price: numbers.trigger_price,
            slippage: numbers.slippage,
            tip: numbers.tip,
            side: self.side,
        })
    }
}

/// Edit form; only the numeric terms of an order can change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditForm {
    pub amount: String,
    pub trigger_price: String,
    pub slippage: String,
    pub tip: String,
}

impl EditForm {
    pub fn from_order(order: &LimitOrder) -> Self {
        Self {
            amount: order.amount.to_string(),
            trigger_price: order.trigger_price.to_string(),
            slippage: order.slippage.to_string(),
            tip: order.tip.to_string(),
        }
    }

    pub fn to_update_request(&self) -> Result<UpdateOrderRequest, Invalid> {
        if [&self.amount, &self.trigger_price, &self.slippage, &self.tip].iter().any(|v| required(v).is_none()) {
            return Err(("Missing Fields", MISSING_FIELDS));
        }
        let (Some(amount), Some(trigger_price)) = (positive(&self.amount), positive(&self.trigger_price)) else {
            return Err(INVALID_NUMBERS);
        };
        let (Some(slippage), Some(tip)) = (non_negative(&self.slippage), non_negative(&self.tip)) else {
            return Err(("Invalid Values", "Slippage and tip cannot be negative"));
        };
        Ok(UpdateOrderRequest { amount, trigger_price, slippage, tip })
    }
}

/// "Buy when price goes above $1.23" style summary of an order's trigger.
pub fn trigger_summary(order: &LimitOrder) -> String {
    let side = match order.side {
        TradeSide::Buy => "Buy",
        TradeSide::Sell => "Sell",
    };
    let direction = match order.order_type {
        OrderType::High => "above",
        OrderType::Low => "below",
    };
    format!("{side} when price goes {direction} ${}", format::price(order.trigger_price))
}

#[component]
pub fn LimitOrdersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let counter = RwSignal::new(0_u64);
    let query = use_authed_query(auth, counter, crate::net::api::orders);
    let status = Signal::derive(move || query.with(|q| q.view_state(Vec::is_empty)));

    let creating = RwSignal::new(false);
    let editing = RwSignal::new(None::<LimitOrder>);
    let deleting = RwSignal::new(None::<LimitOrder>);
    let busy = RwSignal::new(false);
    let token = move || auth.with_untracked(|a| a.token().map(str::to_owned));

    let on_create = Callback::new(move |form: OrderForm| {
        if busy.get_untracked() {
            return;
        }
        let request = match form.to_create_request() {
            Ok(request) => request,
            Err((title, description)) => return notify_failure(toasts, title, description),
        };
        let Some(token) = token() else {
            return;
        };
        run_mutation(busy, toasts, counter, "Create Failed", crate::net::api::create_order(token, request), move |_| {
            creating.set(false);
        });
    });

    let on_update = Callback::new(move |form: EditForm| {
        if busy.get_untracked() {
            return;
        }
        let Some(order_id) = editing.with_untracked(|o| o.as_ref().map(|o| o.id.clone())) else {
            return;
        };
        let request = match form.to_update_request() {
            Ok(request) => request,
            Err((title, description)) => return notify_failure(toasts, title, description),
        };
        let Some(token) = token() else {
            return;
        };
        run_mutation(
            busy,
            toasts,
            counter,
            "Update Failed",
            crate::net::api::update_order(token, order_id, request),
            move |_| editing.set(None),
        );
    });

    let on_delete = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let (Some(order_id), Some(token)) = (deleting.with_untracked(|o| o.as_ref().map(|o| o.id.clone())), token())
        else {
            return;
        };
        run_mutation(busy, toasts, counter, "Delete Failed", crate::net::api::delete_order(token, order_id), move |_| {
            deleting.set(None);
        });
    });

    view! {
        <ProtectedPage title="Limit Orders" subtitle="Automate buys and sells at a target price">
            <div class="page__toolbar">
                <button class="btn btn--primary" on:click=move |_| creating.set(true)>"Create Order"</button>
            </div>
            <details class="card faq">
                <summary>"How do I place a limit order for SOL?"</summary>
                <p>
                    "Use the wrapped SOL mint address "
                    <code class="mono">{WRAPPED_SOL_MINT}</code>
                    "."
                </p>
            </details>

            <ViewStatus state=status empty_text="No limit orders yet." on_retry=Callback::new(move |()| refresh(counter))/>
            <div class="card-grid">
                <For
                    each=move || query.with(|q| q.ready().cloned().unwrap_or_default())
                    key=|order| (order.id.clone(), order.updated_at.clone())
                    children=move |order| order_card(order, editing, deleting)
                />
            </div>

            <Show when=move || creating.get()>
                <CreateOrderDialog busy=busy on_cancel=Callback::new(move |()| creating.set(false)) on_submit=on_create/>
            </Show>
            {move || editing.get().map(|order| view! {
                <EditOrderDialog
                    order=order
                    busy=busy
                    on_cancel=Callback::new(move |()| editing.set(None))
                    on_submit=on_update
                />
            })}
            {move || deleting.get().map(|order| view! {
                <ConfirmDialog
                    title="Delete Order"
                    message=Signal::derive(move || format!("Delete this {} order? This cannot be undone.", order.symbol))
                    confirm_label="Delete"
                    busy=busy
                    on_cancel=Callback::new(move |()| deleting.set(None))
                    on_confirm=on_delete
                />
            })}
        </ProtectedPage>
    }
}

fn order_card(order: LimitOrder, editing: RwSignal<Option<LimitOrder>>, deleting: RwSignal<Option<LimitOrder>>) -> impl IntoView {
    let summary = trigger_summary(&order);
    let meta = format!(
        "{} • {} • {}",
        order.side.as_str().to_uppercase(),
        order.order_type.as_str().to_uppercase(),
        order.dex.to_uppercase()
    );
    let for_edit = order.clone();
    let for_delete = order.clone();

    view! {
        <div class="card order-card">
            <div class="order-card__head">
                <img class="token-logo" src=order.logo alt=""/>
                <div>
                    <strong>{order.name}</strong>
                    " "
                    <small>{order.symbol}</small>
                </div>
                <span class="badge">{order.status.as_str()}</span>
            </div>
            <p class="order-card__meta">{meta}</p>
            <p>{summary}</p>
            <dl class="order-card__terms">
                <dt>"Amount"</dt>
                <dd>{format::trim_decimal(order.amount, 9)}</dd>
                <dt>"Current price"</dt>
                <dd>{format!("${}", format::price(order.current_price))}</dd>
                <dt>"Slippage"</dt>
                <dd>{format!("{}%", order.slippage)}</dd>
                <dt>"Tip"</dt>
                <dd>{format!("{} SOL", order.tip)}</dd>
                <dt>"Created"</dt>
                <dd>{format::date_time(&order.created_at)}</dd>
            </dl>
            {order.signature.map(|signature| view! {
                <a class="link mono" href=format::solscan_tx(&signature) target="_blank" rel="noopener noreferrer">
                    {format::short_address(&signature)}
                </a>
            })}
            <div class="order-card__actions">
                <button class="btn btn--small" on:click=move |_| editing.set(Some(for_edit.clone()))>"Edit"</button>
                <button class="btn btn--small btn--danger" on:click=move |_| deleting.set(Some(for_delete.clone()))>
                    "Delete"
                </button>
            </div>
        </div>
    }
}

/// Text input bound to one field of a form signal.
fn text_field<F: Send + Sync + 'static>(
    form: RwSignal<F>,
    label: &'static str,
    placeholder: &'static str,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView {
    view! {
        <label class="dialog__label">{label}</label>
        <input
            class="input"
            type="text"
            placeholder=placeholder
            prop:value=move || form.with(get)
            on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        />
    }
}

#[component]
fn CreateOrderDialog(
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<OrderForm>,
) -> impl IntoView {
    let form = RwSignal::new(OrderForm::default());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Limit Order"</h2>
                {text_field(form, "Token Mint *", "Token mint address", |f| f.mint.clone(), |f, v| f.mint = v)}
                {text_field(form, "Amount *", "Amount", |f| f.amount.clone(), |f, v| f.amount = v)}
                <label class="dialog__label">"DEX *"</label>
                <select
                    class="input"
                    on:change=move |ev| {
                        if let Ok(dex) = event_target_value(&ev).parse::<Dex>() {
                            form.update(|f| f.dex = dex);
                        }
                    }
                >
                    {Dex::ALL
                        .into_iter()
                        .map(|dex| view! {
                            <option value=dex.as_str() selected=move || form.with(|f| f.dex == dex)>{dex.label()}</option>
                        })
                        .collect::<Vec<_>>()}
                </select>
                <label class="dialog__label">"Order Type *"</label>
                <select
                    class="input"
                    on:change=move |ev| {
                        if let Ok(order_type) = event_target_value(&ev).parse::<OrderType>() {
                            form.update(|f| f.order_type = order_type);
                        }
                    }
                >
                    <option value="high" selected=move || form.with(|f| f.order_type == OrderType::High)>
                        "High (trigger above)"
                    </option>
                    <option value="low" selected=move || form.with(|f| f.order_type == OrderType::Low)>
                        "Low (trigger below)"
                    </option>
                </select>
                <label class="dialog__label">"Type *"</label>
                <select
                    class="input"
                    on:change=move |ev| {
                        if let Ok(side) = event_target_value(&ev).parse::<TradeSide>() {
                            form.update(|f| f.side = side);
                        }
                    }
                >
                    <option value="buy" selected=move || form.with(|f| f.side == TradeSide::Buy)>"Buy"</option>
                    <option value="sell" selected=move || form.with(|f| f.side == TradeSide::Sell)>"Sell"</option>
                </select>
                {text_field(form, "Trigger Price (USD) *", "0.0", |f| f.trigger_price.clone(), |f, v| f.trigger_price = v)}
                {text_field(form, "Slippage (%)", "10", |f| f.slippage.clone(), |f, v| f.slippage = v)}
                {text_field(form, "Tip (SOL)", "0.001", |f| f.tip.clone(), |f, v| f.tip = v)}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(()) disabled=move || busy.get()>"Cancel"</button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| on_submit.run(form.get_untracked())
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Creating..." } else { "Create Order" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn EditOrderDialog(
    order: LimitOrder,
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<EditForm>,
) -> impl IntoView {
    let form = RwSignal::new(EditForm::from_order(&order));

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Edit {} Order", order.symbol)}</h2>
                <p class="dialog__hint">{trigger_summary(&order)}</p>
                {text_field(form, "Amount", "Amount", |f| f.amount.clone(), |f, v| f.amount = v)}
                {text_field(form, "Trigger Price (USD)", "0.0", |f| f.trigger_price.clone(), |f, v| f.trigger_price = v)}
                {text_field(form, "Slippage (%)", "10", |f| f.slippage.clone(), |f, v| f.slippage = v)}
                {text_field(form, "Tip (SOL)", "0.001", |f| f.tip.clone(), |f, v| f.tip = v)}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(()) disabled=move || busy.get()>"Cancel"</button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| on_submit.run(form.get_untracked())
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
