//! Helpers shared by the resolver integration tests.
#![allow(dead_code)]

use jsscope_ast::{Ident, Mark, Program, VisitMut, VisitMutWith};
use jsscope_resolver::{Resolution, ResolverOptions, resolve};

/// `(name, mark)` for every identifier, in source order.
#[derive(Debug, Default)]
pub struct Marks(pub Vec<(String, Mark)>);

impl VisitMut for Marks {
    fn visit_mut_ident(&mut self, n: &mut Ident) {
        match n.mark {
            Some(mark) => self.0.push((n.sym.clone(), mark)),
            None => panic!("identifier `{}` left unmarked", n.sym),
        }
    }
}

impl Marks {
    pub fn collect(tree: &mut Program) -> Self {
        let mut marks = Marks::default();
        tree.visit_mut_with(&mut marks);
        marks
    }

    /// Marks of every occurrence of `name`, in source order.
    pub fn of(&self, name: &str) -> Vec<Mark> {
        self.0
            .iter()
            .filter(|(sym, _)| sym == name)
            .map(|(_, mark)| *mark)
            .collect()
    }

    /// Identifiers grouped by binding: each mark is replaced by the order in
    /// which it was first seen, so runs with different mark values compare
    /// equal when they bind the same way.
    pub fn partition(&self) -> Vec<(String, Option<usize>)> {
        let mut seen: Vec<Mark> = Vec::new();
        let mut groups = Vec::with_capacity(self.0.len());
        for (name, mark) in &self.0 {
            let group = if mark.is_unresolved() {
                None
            } else {
                match seen.iter().position(|m| m == mark) {
                    Some(index) => Some(index),
                    None => {
                        seen.push(*mark);
                        Some(seen.len() - 1)
                    }
                }
            };
            groups.push((name.clone(), group));
        }
        groups
    }
}

pub fn run(tree: &mut Program) -> (Resolution, Marks) {
    run_with(tree, ResolverOptions::default())
}

pub fn run_with(tree: &mut Program, options: ResolverOptions) -> (Resolution, Marks) {
    let resolution = match resolve(tree, options) {
        Ok(resolution) => resolution,
        Err(err) => panic!("resolution failed: {err}"),
    };
    (resolution, Marks::collect(tree))
}
