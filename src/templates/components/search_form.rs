use crate::domain::{FilterCriteria, ListingType, TypeFilter};
use crate::templates::components::format::{date_input_value, format_price};
use maud::{html, Markup};

const MAX_BEDROOMS_INPUT: u32 = 10;

/// The search form, prefilled from the session's draft criteria. `price_ceiling` is
/// the upper end of both price sliders. The sliders step by one rupee so exact catalog
/// bounds are submitted unchanged.
pub fn search_form(draft: &FilterCriteria, price_ceiling: u64) -> Markup {
    html! {
        div class="search-card" {
            form method="post" action="/search" {
                div class="search-grid" {
                    div class="form-group" {
                        label for="type" { "Property Type" }
                        select id="type" name="type" class="form-control" {
                            option value=(TypeFilter::Any.as_str()) selected[draft.listing_type == TypeFilter::Any] { "Any Type" }
                            @for t in ListingType::ALL {
                                option value=(TypeFilter::Only(t).as_str()) selected[draft.listing_type == TypeFilter::Only(t)] {
                                    (t.label())
                                }
                            }
                        }
                    }

                    div class="form-group" {
                        label for="min_price" { "Min Price: " (format_price(draft.min_price)) }
                        input id="min_price" name="min_price" type="range"
                            min="0" max=(price_ceiling) step="1" value=(draft.min_price);
                    }

                    div class="form-group" {
                        label for="max_price" { "Max Price: " (format_price(draft.max_price)) }
                        input id="max_price" name="max_price" type="range"
                            min="0" max=(price_ceiling) step="1" value=(draft.max_price);
                    }

                    div class="form-group" {
                        label { "Bedrooms: " (draft.min_bedrooms) " - " (draft.max_bedrooms) }
                        div class="row" {
                            input class="form-control" name="min_bedrooms" type="number"
                                min="0" max=(MAX_BEDROOMS_INPUT.max(draft.max_bedrooms)) value=(draft.min_bedrooms);
                            span { "to" }
                            input class="form-control" name="max_bedrooms" type="number"
                                min="0" max=(MAX_BEDROOMS_INPUT.max(draft.max_bedrooms)) value=(draft.max_bedrooms);
                        }
                    }

                    div class="form-group" {
                        label for="location" { "Location" }
                        input id="location" class="form-control" name="location" type="text"
                            placeholder="e.g. Colombo 07" value=(draft.location);
                    }

                    div class="form-group" {
                        label for="added_from" { "Added After" }
                        input id="added_from" class="form-control" name="added_from" type="date"
                            value=(date_input_value(draft.added_from));
                    }

                    div class="form-group" {
                        label for="added_to" { "Added Before" }
                        input id="added_to" class="form-control" name="added_to" type="date"
                            value=(date_input_value(draft.added_to));
                    }
                }

                div class="action-buttons" {
                    button type="submit" class="btn-search" { "Search Properties" }
                    button type="submit" class="btn-clear" formaction="/search/clear" { "Clear Filter" }
                }
            }
        }
    }
}
