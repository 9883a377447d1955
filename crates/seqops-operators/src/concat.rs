//! Lazy concatenation: concat, append, prepend.

use std::iter::{Chain, Once};

use crate::seq::Seq;

impl<I: Iterator> Seq<I> {
    pub fn concat<J>(self, second: J) -> Seq<Chain<I, J::IntoIter>>
    where
        J: IntoIterator<Item = I::Item>,
    {
        self.then(|iter| iter.chain(second))
    }

    pub fn append(self, item: I::Item) -> Seq<Chain<I, Once<I::Item>>> {
        self.then(|iter| iter.chain(std::iter::once(item)))
    }

    pub fn prepend(self, item: I::Item) -> Seq<Chain<Once<I::Item>, I>> {
        self.then(|iter| std::iter::once(item).chain(iter))
    }
}
