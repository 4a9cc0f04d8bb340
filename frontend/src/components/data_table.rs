use crate::components::empty_state::EmptyState;
use leptos::*;
use std::cmp::Ordering;
use std::rc::Rc;

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;
pub const ROWS_PER_PAGE_OPTIONS: [usize; 5] = [10, 15, 20, 25, 30];
const DEFAULT_EMPTY_MESSAGE: &str = "There are no records to display";

type Accessor<T> = Rc<dyn Fn(&T) -> String>;
type Comparator<T> = Rc<dyn Fn(&T, &T) -> Ordering>;
type Predicate<T> = Rc<dyn Fn(&T) -> bool>;

/// How a column turns a row into cell content.
pub enum CellRenderer<T> {
    /// The column accessor's text.
    Text,
    /// 1-based position of the row within the current page.
    RowIndex,
    Custom(Rc<dyn Fn(&T) -> View>),
}

impl<T> Clone for CellRenderer<T> {
    fn clone(&self) -> Self {
        match self {
            CellRenderer::Text => CellRenderer::Text,
            CellRenderer::RowIndex => CellRenderer::RowIndex,
            CellRenderer::Custom(render) => CellRenderer::Custom(render.clone()),
        }
    }
}

pub struct CellStyleRule<T> {
    when: Predicate<T>,
    style: String,
}

impl<T> Clone for CellStyleRule<T> {
    fn clone(&self) -> Self {
        Self {
            when: self.when.clone(),
            style: self.style.clone(),
        }
    }
}

/// Column descriptor consumed by [`DataTable`].
pub struct ColumnDef<T> {
    label: String,
    accessor: Option<Accessor<T>>,
    comparator: Option<Comparator<T>>,
    sortable: bool,
    cell: CellRenderer<T>,
    style_rules: Vec<CellStyleRule<T>>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            accessor: self.accessor.clone(),
            comparator: self.comparator.clone(),
            sortable: self.sortable,
            cell: self.cell.clone(),
            style_rules: self.style_rules.clone(),
        }
    }
}

impl<T> ColumnDef<T> {
    fn with_cell(label: impl Into<String>, cell: CellRenderer<T>) -> Self {
        Self {
            label: label.into(),
            accessor: None,
            comparator: None,
            sortable: false,
            cell,
            style_rules: Vec::new(),
        }
    }

    pub fn text(label: impl Into<String>, accessor: impl Fn(&T) -> String + 'static) -> Self {
        let mut column = Self::with_cell(label, CellRenderer::Text);
        column.accessor = Some(Rc::new(accessor));
        column
    }

    pub fn row_index(label: impl Into<String>) -> Self {
        Self::with_cell(label, CellRenderer::RowIndex)
    }

    pub fn custom(label: impl Into<String>, render: impl Fn(&T) -> View + 'static) -> Self {
        Self::with_cell(label, CellRenderer::Custom(Rc::new(render)))
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sorts with `compare` instead of the accessor's text ordering.
    pub fn sort_by(mut self, compare: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.comparator = Some(Rc::new(compare));
        self.sortable = true;
        self
    }

    pub fn style_when(
        mut self,
        when: impl Fn(&T) -> bool + 'static,
        style: impl Into<String>,
    ) -> Self {
        self.style_rules.push(CellStyleRule {
            when: Rc::new(when),
            style: style.into(),
        });
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable && (self.comparator.is_some() || self.accessor.is_some())
    }

    pub fn text_for(&self, row: &T) -> String {
        self.accessor
            .as_ref()
            .map(|accessor| accessor(row))
            .unwrap_or_default()
    }

    /// Style of the first rule whose predicate holds.
    pub fn style_for(&self, row: &T) -> Option<String> {
        self.style_rules
            .iter()
            .find(|rule| (rule.when)(row))
            .map(|rule| rule.style.clone())
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match (&self.comparator, &self.accessor) {
            (Some(compare), _) => compare(a, b),
            (None, Some(accessor)) => accessor(a).cmp(&accessor(b)),
            (None, None) => Ordering::Equal,
        }
    }

    fn render_cell(&self, row: &T, index: usize) -> View {
        match &self.cell {
            CellRenderer::Text => self.text_for(row).into_view(),
            CellRenderer::RowIndex => (index + 1).to_string().into_view(),
            CellRenderer::Custom(render) => render(row),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    fn aria(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub direction: SortDirection,
}

/// Clicking the sorted column flips its direction; any other column starts ascending.
pub fn next_sort(current: Option<SortState>, column: usize) -> SortState {
    match current {
        Some(state) if state.column == column => SortState {
            column,
            direction: match state.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            },
        },
        _ => SortState {
            column,
            direction: SortDirection::Ascending,
        },
    }
}

pub fn sorted_rows<T: Clone>(
    rows: &[T],
    columns: &[ColumnDef<T>],
    sort: Option<SortState>,
) -> Vec<T> {
    let mut sorted = rows.to_vec();
    let Some(state) = sort else {
        return sorted;
    };
    let Some(column) = columns.get(state.column).filter(|c| c.is_sortable()) else {
        return sorted;
    };
    sorted.sort_by(|a, b| match state.direction {
        SortDirection::Ascending => column.compare(a, b),
        SortDirection::Descending => column.compare(b, a),
    });
    sorted
}

pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page).max(1)
}

pub fn clamp_page(page: usize, total: usize, per_page: usize) -> usize {
    page.clamp(1, page_count(total, per_page))
}

/// Half-open `[start, end)` slice of rows shown on `page`.
pub fn page_bounds(page: usize, per_page: usize, total: usize) -> (usize, usize) {
    let page = clamp_page(page, total, per_page);
    let start = ((page - 1) * per_page).min(total);
    let end = (start + per_page).min(total);
    (start, end)
}

pub fn range_label(page: usize, per_page: usize, total: usize) -> String {
    if total == 0 {
        return "0 of 0".to_string();
    }
    let (start, end) = page_bounds(page, per_page, total);
    format!("{}-{} of {}", start + 1, end, total)
}

const HEADER_CELL_CLASS: &str =
    "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const PAGER_BUTTON_CLASS: &str =
    "px-2 py-1 rounded hover:bg-action-ghost-bg-hover disabled:opacity-40 disabled:cursor-not-allowed";

#[component]
pub fn DataTable<T: Clone + 'static>(
    columns: Vec<ColumnDef<T>>,
    #[prop(into)] rows: Signal<Vec<T>>,
    #[prop(optional, into)] empty_message: Option<String>,
) -> impl IntoView {
    let columns = store_value(columns);
    let empty_message =
        store_value(empty_message.unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string()));
    let sort = create_rw_signal(None::<SortState>);
    let page = create_rw_signal(1usize);
    let per_page = create_rw_signal(DEFAULT_ROWS_PER_PAGE);

    let total = Signal::derive(move || rows.with(|rows| rows.len()));
    let current_page = Signal::derive(move || clamp_page(page.get(), total.get(), per_page.get()));
    let last_page = Signal::derive(move || page_count(total.get(), per_page.get()));
    let visible_rows = Signal::derive(move || {
        let sorted = columns.with_value(|cols| rows.with(|rows| sorted_rows(rows, cols, sort.get())));
        let (start, end) = page_bounds(current_page.get(), per_page.get(), sorted.len());
        sorted[start..end].to_vec()
    });

    let header = move || {
        columns.with_value(|cols| {
            cols.iter()
                .enumerate()
                .map(|(index, column)| {
                    let label = column.label().to_string();
                    if !column.is_sortable() {
                        return view! { <th class=HEADER_CELL_CLASS>{label}</th> }.into_view();
                    }
                    let direction =
                        move || sort.get().filter(|s| s.column == index).map(|s| s.direction);
                    view! {
                        <th
                            class=HEADER_CELL_CLASS
                            aria-sort=move || direction().map(|d| d.aria()).unwrap_or("none")
                        >
                            <button
                                type="button"
                                class="inline-flex items-center gap-1 uppercase hover:text-fg"
                                on:click=move |_| {
                                    sort.update(|state| *state = Some(next_sort(*state, index)));
                                    page.set(1);
                                }
                            >
                                <span>{label}</span>
                                <span aria-hidden="true">
                                    {move || direction().map(|d| d.indicator()).unwrap_or("")}
                                </span>
                            </button>
                        </th>
                    }
                    .into_view()
                })
                .collect_view()
        })
    };

    let body = move || {
        let rows = visible_rows.get();
        columns.with_value(|cols| {
            rows.iter()
                .enumerate()
                .map(|(index, row)| {
                    let cells = cols
                        .iter()
                        .map(|column| {
                            view! {
                                <td
                                    class="px-4 py-3 whitespace-nowrap text-sm text-fg"
                                    style=column.style_for(row)
                                >
                                    {column.render_cell(row, index)}
                                </td>
                            }
                        })
                        .collect_view();
                    view! { <tr class="hover:bg-surface-muted transition-colors">{cells}</tr> }
                })
                .collect_view()
        })
    };

    view! {
        <Show
            when=move || { total.get() > 0 }
            fallback=move || view! { <EmptyState title=empty_message.get_value() /> }
        >
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>{header}</tr>
                    </thead>
                    <tbody class="bg-surface-elevated divide-y divide-border">{body}</tbody>
                </table>
            </div>
            <div class="flex flex-wrap items-center justify-end gap-4 px-4 py-3 text-sm text-fg-muted border-t border-border">
                <label class="flex items-center gap-2">
                    <span>{"Rows per page:"}</span>
                    <select
                        class="border border-border rounded px-2 py-1 bg-surface-elevated"
                        prop:value=move || per_page.get().to_string()
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<usize>() {
                                per_page.set(value);
                                page.set(1);
                            }
                        }
                    >
                        {ROWS_PER_PAGE_OPTIONS
                            .iter()
                            .map(|n| view! { <option value=n.to_string()>{n.to_string()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <span>{move || range_label(current_page.get(), per_page.get(), total.get())}</span>
                <div class="flex items-center gap-1">
                    <button
                        type="button"
                        aria-label="First Page"
                        class=PAGER_BUTTON_CLASS
                        disabled=move || { current_page.get() <= 1 }
                        on:click=move |_| page.set(1)
                    >
                        {"«"}
                    </button>
                    <button
                        type="button"
                        aria-label="Previous Page"
                        class=PAGER_BUTTON_CLASS
                        disabled=move || { current_page.get() <= 1 }
                        on:click=move |_| page.set(current_page.get_untracked().saturating_sub(1).max(1))
                    >
                        {"‹"}
                    </button>
                    <button
                        type="button"
                        aria-label="Next Page"
                        class=PAGER_BUTTON_CLASS
                        disabled=move || { current_page.get() >= last_page.get() }
                        on:click=move |_| page.set(current_page.get_untracked() + 1)
                    >
                        {"›"}
                    </button>
                    <button
                        type="button"
                        aria-label="Last Page"
                        class=PAGER_BUTTON_CLASS
                        disabled=move || { current_page.get() >= last_page.get() }
                        on:click=move |_| page.set(last_page.get_untracked())
                    >
                        {"»"}
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        qty: u32,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "pen", qty: 30 },
            Row { name: "desk", qty: 2 },
            Row { name: "lamp", qty: 2 },
            Row { name: "chair", qty: 11 },
        ]
    }

    fn columns() -> Vec<ColumnDef<Row>> {
        vec![
            ColumnDef::row_index("#"),
            ColumnDef::text("Name", |r: &Row| r.name.to_string()).sortable(),
            ColumnDef::text("Qty", |r: &Row| r.qty.to_string()).sort_by(|a: &Row, b: &Row| a.qty.cmp(&b.qty)),
            ColumnDef::text("Note", |r: &Row| r.name.to_uppercase()),
        ]
    }

    fn names(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn next_sort_toggles_same_column_and_resets_on_other() {
        let first = next_sort(None, 1);
        assert_eq!(first.direction, SortDirection::Ascending);
        let second = next_sort(Some(first), 1);
        assert_eq!(second.direction, SortDirection::Descending);
        let third = next_sort(Some(second), 1);
        assert_eq!(third.direction, SortDirection::Ascending);
        let other = next_sort(Some(second), 2);
        assert_eq!(other, SortState { column: 2, direction: SortDirection::Ascending });
    }

    #[test]
    fn sorted_rows_uses_accessor_text_by_default() {
        let sorted = sorted_rows(
            &rows(),
            &columns(),
            Some(SortState { column: 1, direction: SortDirection::Ascending }),
        );
        assert_eq!(names(&sorted), vec!["chair", "desk", "lamp", "pen"]);
    }

    #[test]
    fn sorted_rows_prefers_comparator_and_is_stable() {
        let cols = columns();
        let asc = sorted_rows(
            &rows(),
            &cols,
            Some(SortState { column: 2, direction: SortDirection::Ascending }),
        );
        assert_eq!(names(&asc), vec!["desk", "lamp", "chair", "pen"]);
        let desc = sorted_rows(
            &rows(),
            &cols,
            Some(SortState { column: 2, direction: SortDirection::Descending }),
        );
        assert_eq!(names(&desc), vec!["pen", "chair", "desk", "lamp"]);
    }

    #[test]
    fn sorted_rows_ignores_unsortable_or_missing_columns() {
        let cols = columns();
        for column in [0, 3, 9] {
            let unchanged = sorted_rows(
                &rows(),
                &cols,
                Some(SortState { column, direction: SortDirection::Descending }),
            );
            assert_eq!(unchanged, rows());
        }
        assert_eq!(sorted_rows(&rows(), &cols, None), rows());
    }

    #[test]
    fn style_for_returns_first_matching_rule() {
        let column = ColumnDef::text("Qty", |r: &Row| r.qty.to_string())
            .style_when(|r: &Row| r.qty > 10, "color: green;")
            .style_when(|r: &Row| r.qty > 1, "color: gray;");
        assert_eq!(column.style_for(&rows()[0]).as_deref(), Some("color: green;"));
        assert_eq!(column.style_for(&rows()[1]).as_deref(), Some("color: gray;"));
        assert_eq!(column.style_for(&Row { name: "x", qty: 0 }), None);
    }

    #[test]
    fn pagination_helpers_clamp_and_slice() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 1);

        assert_eq!(clamp_page(0, 25, 10), 1);
        assert_eq!(clamp_page(7, 25, 10), 3);

        assert_eq!(page_bounds(1, 10, 25), (0, 10));
        assert_eq!(page_bounds(3, 10, 25), (20, 25));
        assert_eq!(page_bounds(9, 10, 25), (20, 25));
        assert_eq!(page_bounds(1, 10, 0), (0, 0));
    }

    #[test]
    fn range_label_matches_visible_window() {
        assert_eq!(range_label(1, 10, 0), "0 of 0");
        assert_eq!(range_label(1, 10, 4), "1-4 of 4");
        assert_eq!(range_label(2, 10, 23), "11-20 of 23");
        assert_eq!(range_label(5, 10, 23), "21-23 of 23");
    }
}
