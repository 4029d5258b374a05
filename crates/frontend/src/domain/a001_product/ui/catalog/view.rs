use super::view_model::ProductCatalogVm;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::domain::a001_product::aggregate::ProductField;
use leptos::prelude::*;
use thaw::*;

fn placeholder(field: ProductField) -> &'static str {
    match field {
        ProductField::Code => "A001",
        ProductField::Name => "At least 5 characters",
        ProductField::Cost => "Greater than 0",
        ProductField::Price => "From 10 to 100",
        ProductField::Value => "0 or more",
    }
}

#[component]
fn ProductFieldInput(vm: ProductCatalogVm, field: ProductField) -> impl IntoView {
    let value = vm.field_value(field);
    let error = vm.field_error(field);
    let input_type = if field.is_numeric() { "number" } else { "text" };

    view! {
        <div class=move || if error.get().is_some() { "form__group form__group--invalid" } else { "form__group" }>
            <label class="form__label" for=field.key()>{field.label()}</label>
            <input
                type=input_type
                id=field.key()
                step="any"
                prop:value=move || value.get()
                on:input=move |ev| vm.set_field(field, event_target_value(&ev))
                placeholder=placeholder(field)
            />
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

#[component]
pub fn ProductCatalogPage() -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = ProductCatalogVm::new(toast);
    let is_edit_mode = vm.is_edit_mode();
    let products = vm.products();

    view! {
        <div class="page product-catalog">
            <div class="page__header">
                {icon("products")}
                <h2>"Products"</h2>
            </div>

            <div class="details-container product-form">
                <h3>
                    {move || if is_edit_mode.get() { "Edit product" } else { "New product" }}
                </h3>

                <div class="details-form">
                    {ProductField::ALL
                        .into_iter()
                        .map(|field| view! { <ProductFieldInput vm=vm field=field /> })
                        .collect_view()}
                </div>

                <div class="details-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.submit_command()>
                        {move || if is_edit_mode.get() { icon("save") } else { icon("add") }}
                        {move || if is_edit_mode.get() { "Update" } else { "Add" }}
                    </Button>
                    <Show when=move || is_edit_mode.get()>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel_command()>
                            {icon("cancel")}
                            "Cancel"
                        </Button>
                    </Show>
                </div>
            </div>

            <Show
                when=move || !products.with(|p| p.is_empty())
                fallback=|| view! { <p class="empty-state">"No products yet"</p> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            {ProductField::ALL
                                .into_iter()
                                .map(|field| view! { <TableHeaderCell>{field.label()}</TableHeaderCell> })
                                .collect_view()}
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            products
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, product)| {
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{product.code}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{product.name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_money(product.cost)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_money(product.price)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_money(product.value)}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| vm.edit_command(index)
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| vm.remove_command(index)
                                                    >
                                                        {icon("delete")}
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </Show>
        </div>
    }
}
