//! Fixed TypeScript text emitted around the generated declarations.

pub const DISCLAIMER: &str = "\
/*
 * This file was generated by hooksgen.
 * Any changes made to the file will be overwritten.
 */
";

pub const IMPORTS: &str = "\
import * as React from 'react'
import { createContext, useEffect, useState, useContext } from 'react'
import ApolloClient, {
  MutationOptions,
  ObservableQuery,
  WatchQueryOptions,
  ApolloCurrentResult,
} from 'apollo-client'
import { FetchResult } from 'apollo-link'
import { DocumentNode } from 'graphql'
import gql from 'graphql-tag'
";

pub const SUBSCRIPTION_IMPORTS: &str = "\
import { SubscriptionOptions } from 'apollo-client'
import { Observable } from 'apollo-link'
";

pub const POSTAMBLE: &str = "\
/*
 * Boilerplate
 */

type Omit<T, K> = Pick<T, Exclude<keyof T, K>>
type QueryOpts<V> = Omit<WatchQueryOptions<V>, 'query'>
type MutateOpts<D, V> = Omit<MutationOptions<D, V>, 'mutation'>

// The ApolloClient used by every hook below is read from this context.
type ContextType = { apolloClient?: ApolloClient<any> }
const apolloContext = createContext<ContextType>({})

// Must be rendered above every component that uses the hooks in this file.
export function ApolloHooksProvider({
  children,
  apolloClient,
}: {
  children?: React.ReactNode
  apolloClient: ApolloClient<any> | undefined
}) {
  const elementType = apolloContext.Provider
  const elementProps: React.ProviderProps<ContextType> = {
    value: { apolloClient },
  }
  return React.createElement(elementType, elementProps, children)
}

// Turns a query document into a function that takes options and returns a
// query ready to be passed to useApolloQuery.
function defineQuery<V, D>(doc: DocumentNode) {
  return function configureQuery(opts: QueryOpts<V> = {}) {
    return function executeQuery(client: ApolloClient<any>) {
      return client.watchQuery<D>({ query: doc, ...opts })
    }
  }
}

// Watches a query configured through the exported function of the same name
// as the query operation. Rerenders the calling component whenever the query
// result changes. Subject to the rules of hooks.
export function useApolloQuery<D, V>(
  configuredQuery: (client: ApolloClient<any>) => ObservableQuery<D, V>
): [ApolloCurrentResult<D>, ObservableQuery<D, V>] {
  const { apolloClient } = useContext(apolloContext)
  if (!apolloClient) throw 'No ApolloClient provided'

  const query = configuredQuery(apolloClient)

  const [result, setResult] = useState(query.currentResult())
  useEffect(() => {
    const subscription = query.subscribe(setResult)
    return () => subscription.unsubscribe()
  }, [])

  return [result, query]
}

// Turns a mutation document into a function that takes options and returns a
// mutation ready to be passed to useApolloMutation.
function defineMutation<V, D>(mutation: DocumentNode) {
  return function configureMutation(opts: MutateOpts<D, V> = {}) {
    return function loadMutation(client: ApolloClient<any>) {
      return function executeMutation(opts2: MutateOpts<D, V> = {}) {
        return client.mutate<D>({ mutation, ...opts, ...opts2 })
      }
    }
  }
}

// Returns the mutate function for a mutation configured through the exported
// function of the same name as the mutation operation. Subject to the rules of
// hooks.
export function useApolloMutation<D, V>(
  configuredMutation: (
    client: ApolloClient<any>
  ) => (opts?: MutateOpts<D, V>) => Promise<FetchResult<D>>
) {
  const { apolloClient } = useContext(apolloContext)
  if (!apolloClient) throw 'No ApolloClient provided'
  return configuredMutation(apolloClient)
}
";

pub const SUBSCRIPTION_POSTAMBLE: &str = "\
type SubscribeOpts<V> = Omit<SubscriptionOptions<V>, 'query'>

// Turns a subscription document into a function that takes options and returns
// a subscription ready to be passed to useApolloSubscription.
function defineSubscription<V, D>(subscription: DocumentNode) {
  return function configureSubscription(opts: SubscribeOpts<V> = {}) {
    return function executeSubscription(client: ApolloClient<any>) {
      return client.subscribe<D, V>({ query: subscription, ...opts })
    }
  }
}

// Returns the latest event of a subscription configured through the exported
// function of the same name as the subscription operation. Rerenders the
// calling component on every event. Subject to the rules of hooks.
export function useApolloSubscription<D>(
  configuredSubscription: (
    client: ApolloClient<any>
  ) => Observable<FetchResult<D>>
): FetchResult<D> | undefined {
  const { apolloClient } = useContext(apolloContext)
  if (!apolloClient) throw 'No ApolloClient provided'

  const [result, setResult] = useState<FetchResult<D> | undefined>(undefined)
  useEffect(() => {
    const subscription = configuredSubscription(apolloClient).subscribe(setResult)
    return () => subscription.unsubscribe()
  }, [])

  return result
}
";
