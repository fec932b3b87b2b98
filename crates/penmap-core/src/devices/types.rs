use serde::Serialize;

/// A pen-input endpoint (stylus or eraser sensor) reported by the tablet driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    pub name: String,
    pub id: String,
}

/// Device name to id mapping in the order the driver reported the devices.
///
/// Inserting a name that is already present replaces its id in place, so the
/// last report of a device wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeviceMap {
    devices: Vec<Device>,
}

impl DeviceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, id: impl Into<String>) {
        let name = name.into();
        let id = id.into();
        match self.devices.iter_mut().find(|d| d.name == name) {
            Some(existing) => existing.id = id,
            None => self.devices.push(Device { name, id }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.devices
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter()
    }

    /// Ids of every device, the full set a mapping is applied to.
    pub fn ids(&self) -> Vec<String> {
        self.devices.iter().map(|d| d.id.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a DeviceMap {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}
