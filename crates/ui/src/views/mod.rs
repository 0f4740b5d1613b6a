mod draw;
mod history;
mod pair_card;

pub use draw::DrawView;
pub use history::HistoryView;
pub(crate) use pair_card::PairCard;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
