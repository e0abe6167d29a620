//! Hand-assembles class-file bytes for reader tests.

#![allow(dead_code)]

pub struct ClassBytes {
    pool: Vec<Vec<u8>>,
    pool_slots: u16,
    access: u16,
    this_class: u16,
    super_class: u16,
    interfaces: Vec<u16>,
    fields: Vec<(u16, u16, u16)>,
    methods: Vec<(u16, u16, u16)>,
}

impl ClassBytes {
    pub fn new(name: &str, super_name: Option<&str>, access: u16) -> Self {
        let mut b = Self {
            pool: Vec::new(),
            pool_slots: 1,
            access,
            this_class: 0,
            super_class: 0,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        };
        b.this_class = b.class(name);
        if let Some(s) = super_name {
            b.super_class = b.class(s);
        }
        b
    }

    pub fn utf8(&mut self, s: &str) -> u16 {
        let mut e = vec![1u8];
        e.extend_from_slice(&(s.len() as u16).to_be_bytes());
        e.extend_from_slice(s.as_bytes());
        self.push(e, 1)
    }

    pub fn class(&mut self, name: &str) -> u16 {
        let name_idx = self.utf8(name);
        let mut e = vec![7u8];
        e.extend_from_slice(&name_idx.to_be_bytes());
        self.push(e, 1)
    }

    pub fn long(&mut self, v: i64) -> u16 {
        let mut e = vec![5u8];
        e.extend_from_slice(&v.to_be_bytes());
        self.push(e, 2)
    }

    pub fn raw_entry(&mut self, bytes: Vec<u8>) -> u16 {
        self.push(bytes, 1)
    }

    pub fn interface(mut self, name: &str) -> Self {
        let idx = self.class(name);
        self.interfaces.push(idx);
        self
    }

    pub fn field(mut self, name: &str, desc: &str, access: u16) -> Self {
        let n = self.utf8(name);
        let d = self.utf8(desc);
        self.fields.push((access, n, d));
        self
    }

    pub fn method(mut self, name: &str, desc: &str, access: u16) -> Self {
        let n = self.utf8(name);
        let d = self.utf8(desc);
        self.methods.push((access, n, d));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&0xCAFE_BABEu32.to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes());
        out.extend_from_slice(&52u16.to_be_bytes());
        out.extend_from_slice(&self.pool_slots.to_be_bytes());
        for e in &self.pool {
            out.extend_from_slice(e);
        }
        out.extend_from_slice(&self.access.to_be_bytes());
        out.extend_from_slice(&self.this_class.to_be_bytes());
        out.extend_from_slice(&self.super_class.to_be_bytes());
        out.extend_from_slice(&(self.interfaces.len() as u16).to_be_bytes());
        for i in &self.interfaces {
            out.extend_from_slice(&i.to_be_bytes());
        }
        for members in [&self.fields, &self.methods] {
            out.extend_from_slice(&(members.len() as u16).to_be_bytes());
            for &(access, name, desc) in members {
                out.extend_from_slice(&access.to_be_bytes());
                out.extend_from_slice(&name.to_be_bytes());
                out.extend_from_slice(&desc.to_be_bytes());
                // One opaque attribute, to exercise skipping.
                let attr_name = name;
                out.extend_from_slice(&1u16.to_be_bytes());
                out.extend_from_slice(&attr_name.to_be_bytes());
                out.extend_from_slice(&3u32.to_be_bytes());
                out.extend_from_slice(&[0xde, 0xad, 0x00]);
            }
        }
        out.extend_from_slice(&0u16.to_be_bytes());
        out
    }

    fn push(&mut self, entry: Vec<u8>, slots: u16) -> u16 {
        let idx = self.pool_slots;
        self.pool.push(entry);
        self.pool_slots += slots;
        idx
    }
}
