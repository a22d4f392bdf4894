//! Draw-order layers keyed by an enum

/// Render layers, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Scenery behind the map
    Background,
    /// Tile quads
    Map,
    /// Enemies
    Mobs,
    /// The player
    Player,
    /// Overlay
    Gui,
}

impl RenderLayer {
    /// Number of layers
    pub const COUNT: usize = 5;

    /// Every layer in draw order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Background,
        Self::Map,
        Self::Mobs,
        Self::Player,
        Self::Gui,
    ];

    /// Storage slot of the layer
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One list of items per render layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerStack<T> {
    layers: [Vec<T>; RenderLayer::COUNT],
}

impl<T> Default for LayerStack<T> {
    fn default() -> Self {
        Self {
            layers: std::array::from_fn(|_| Vec::new()),
        }
    }
}

impl<T: PartialEq> LayerStack<T> {
    /// Append an item to a layer
    pub fn add(&mut self, layer: RenderLayer, item: T) {
        if let Some(items) = self.layers.get_mut(layer.index()) {
            items.push(item);
        }
    }

    /// Remove the first occurrence of an item from a layer
    ///
    /// Returns true if an item was removed.
    pub fn remove(&mut self, layer: RenderLayer, item: &T) -> bool {
        let Some(items) = self.layers.get_mut(layer.index()) else {
            return false;
        };
        items
            .iter()
            .position(|candidate| candidate == item)
            .map(|position| items.remove(position))
            .is_some()
    }

    /// Empty every layer
    pub fn clear(&mut self) {
        self.layers.iter_mut().for_each(Vec::clear);
    }

    /// Items of one layer
    pub fn get(&self, layer: RenderLayer) -> &[T] {
        self.layers
            .get(layer.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All items with their layer, back to front
    pub fn iter_in_draw_order(&self) -> impl Iterator<Item = (RenderLayer, &T)> {
        RenderLayer::ALL
            .into_iter()
            .flat_map(move |layer| self.get(layer).iter().map(move |item| (layer, item)))
    }

    /// Total number of items
    pub fn len(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    /// True when every layer is empty
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(Vec::is_empty)
    }
}
