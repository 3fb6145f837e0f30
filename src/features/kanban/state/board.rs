use crate::core::models::{Categoria, Cliente};

/// Cards placed in one column during a render.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnCards {
    pub categoria: Categoria,
    pub cards: Vec<Cliente>,
    /// Cards placed by the last render. A drop-time move does not touch it.
    pub count: usize,
}

/// Snapshot of the board drawn from one client list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    columns: Vec<ColumnCards>,
}

impl Board {
    /// Partition `clients` into the registry columns, in input order.
    /// Clients whose categoria matches no column are skipped.
    pub fn render(clients: Vec<Cliente>) -> Self {
        let mut columns: Vec<ColumnCards> = Categoria::all()
            .into_iter()
            .map(|categoria| ColumnCards {
                categoria,
                cards: Vec::new(),
                count: 0,
            })
            .collect();

        for cliente in clients {
            let Some(stage) = cliente.stage() else {
                continue;
            };
            if let Some(column) = columns.iter_mut().find(|c| c.categoria == stage) {
                column.cards.push(cliente);
            }
        }

        for column in columns.iter_mut() {
            column.count = column.cards.len();
        }

        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnCards] {
        &self.columns
    }

    pub fn column(&self, categoria: Categoria) -> Option<&ColumnCards> {
        self.columns.iter().find(|c| c.categoria == categoria)
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    pub fn find(&self, client_id: &str) -> Option<&Cliente> {
        self.columns
            .iter()
            .flat_map(|c| c.cards.iter())
            .find(|cliente| cliente.id == client_id)
    }

    /// Append the card to `target`'s list ahead of the server round trip.
    /// Returns false when the card or the column is not on the board.
    pub fn move_card(&mut self, client_id: &str, target: Categoria) -> bool {
        if self.column(target).is_none() {
            return false;
        }

        let mut moved = None;
        for column in self.columns.iter_mut() {
            if let Some(index) = column.cards.iter().position(|c| c.id == client_id) {
                moved = Some(column.cards.remove(index));
                break;
            }
        }

        let Some(cliente) = moved else {
            return false;
        };
        if let Some(column) = self.columns.iter_mut().find(|c| c.categoria == target) {
            column.cards.push(cliente);
        }
        true
    }
}
