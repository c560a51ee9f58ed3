macro_rules! downcast_get_type_id {
    () => {
        /// Returns the type ID of the implementing type, used by `downcast_ref`.
        ///
        /// The private `PrivateHelper` argument and return value keep safe code from overriding
        /// this method, which `downcast_ref` relies on to be truthful.
        #[doc(hidden)]
        #[allow(dead_code)]
        fn __private_get_type_id__(&self, _: PrivateHelper) -> (std::any::TypeId, PrivateHelper)
        where
            Self: 'static,
        {
            (std::any::TypeId::of::<Self>(), PrivateHelper(()))
        }
    };
}

// Generate implementation for dyn $name
macro_rules! downcast_dyn {
    ($name:ident) => {
        /// A struct with a private constructor, for use with `__private_get_type_id__`.
        #[doc(hidden)]
        #[allow(dead_code)]
        pub struct PrivateHelper(());

        impl dyn $name + Send + Sync + 'static {
            /// Downcasts to a specific error type.
            pub fn downcast_ref<T: $name + 'static>(&self) -> Option<&T> {
                if self.__private_get_type_id__(PrivateHelper(())).0 == std::any::TypeId::of::<T>()
                {
                    // SAFETY: external crates cannot override the default implementation of
                    // `__private_get_type_id__` since it requires returning a private type, so the
                    // returned `TypeId` is that of the concrete type behind this reference.
                    unsafe { Some(&*(self as *const dyn $name as *const T)) }
                } else {
                    None
                }
            }
        }
    };
}

pub(crate) use downcast_dyn;
pub(crate) use downcast_get_type_id;
